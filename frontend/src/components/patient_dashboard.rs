//! 病人工作台：个人概览与预约列表

use crate::api::{ApiResult, CancelToken, appointments_api, dashboard_api};
use crate::components::icons::CalendarDays;
use crate::components::layout::{DashboardHeader, StatCard, Toast};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalsfirst_shared::{Appointment, PatientStats};

#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    let router = use_router();

    let (stats, set_stats) = signal(Option::<PatientStats>::None);
    let (appointments, set_appointments) = signal(Vec::<Appointment>::new());
    let (loading, set_loading) = signal(true);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            let cancel = cancel.clone();
            spawn_local(async move {
                let result = dashboard_api::stats::<PatientStats>().await;
                if cancel.is_cancelled() {
                    return;
                }
                if let ApiResult::Success { data, .. } = result {
                    set_stats.set(Some(data));
                }
            });
        }
    });

    // 后端按当前病人过滤预约列表
    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            let cancel = cancel.clone();
            spawn_local(async move {
                let result = appointments_api::list(0, 100).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    ApiResult::Success { data, .. } => set_appointments.set(data),
                    ApiResult::Failure { error, .. } => {
                        set_notice.set(Some((format!("Failed to load appointments: {}", error), true)));
                    }
                }
                set_loading.set(false);
            });
        }
    });

    view! {
        <div class="min-h-screen bg-base-200">
            <DashboardHeader title="Patient Dashboard" />
            <Toast notice=notice />

            <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard label="Upcoming appointments" value=Signal::derive(move || {
                        stats.get().map(|s| s.upcoming_appointments.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Medical records" value=Signal::derive(move || {
                        stats.get().map(|s| s.medical_records.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Triage priority" value=Signal::derive(move || {
                        stats.get().map(|s| s.triage_priority.clone()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Last visit" value=Signal::derive(move || {
                        stats.get().map(|s| s.last_visit.clone()).unwrap_or_else(|| "—".to_string())
                    }) />
                </div>

                <div class="card bg-base-100 shadow-sm">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <h2 class="card-title">"My Appointments"</h2>
                            <button
                                class="btn btn-primary btn-sm"
                                on:click=move |_| router.navigate(AppRoute::BookAppointment)
                            >
                                <CalendarDays attr:class="h-4 w-4" />
                                "Book appointment"
                            </button>
                        </div>

                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <span class="loading loading-spinner text-primary mx-auto my-8"></span> }
                        >
                            <Show
                                when=move || !appointments.get().is_empty()
                                fallback=|| view! { <p class="text-sm text-base-content/60">"No appointments yet"</p> }
                            >
                                <div class="overflow-x-auto">
                                    <table class="table table-sm">
                                        <thead>
                                            <tr>
                                                <th>"Doctor"</th>
                                                <th>"Date"</th>
                                                <th>"Time"</th>
                                                <th>"Type"</th>
                                                <th>"Status"</th>
                                                <th>"Remarks"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {move || appointments.get().into_iter().map(|appointment| view! {
                                                <tr>
                                                    <td>{appointment.doctor_name.clone().unwrap_or_else(|| appointment.doctor_id.clone())}</td>
                                                    <td>{appointment.date.clone()}</td>
                                                    <td>{appointment.time.clone()}</td>
                                                    <td>{appointment.appointment_type.clone()}</td>
                                                    <td>{appointment.status.as_str()}</td>
                                                    <td>{appointment.doctor_remarks.clone().unwrap_or_default()}</td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            </Show>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
