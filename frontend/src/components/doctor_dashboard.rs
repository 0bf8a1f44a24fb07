//! 医生工作台：预约列表与诊断备注

use crate::api::{ApiResult, CancelToken, appointments_api, dashboard_api};
use crate::components::layout::{DashboardHeader, StatCard, Toast};
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalsfirst_shared::{Appointment, AppointmentStatus, DoctorStats};

#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let (stats, set_stats) = signal(Option::<DoctorStats>::None);
    let (appointments, set_appointments) = signal(Vec::<Appointment>::new());
    let (loading, set_loading) = signal(true);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);
    let (reload, set_reload) = signal(0u32);

    // 正在填写备注的预约
    let (consulting, set_consulting) = signal(Option::<String>::None);
    let (remarks, set_remarks) = signal(String::new());

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
                let result = dashboard_api::stats::<DoctorStats>().await;
                if cancel.is_cancelled() {
                    return;
                }
                if let ApiResult::Success { data, .. } = result {
                    set_stats.set(Some(data));
                }
            });
        }
    });

    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            reload.get();
            let cancel = cancel.clone();
            set_loading.set(true);
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

    // 备注允许为空，提交时始终随请求发送
    let confirm_consult = move |appointment_id: String| {
        let doctor_remarks = remarks.get_untracked();
        spawn_local(async move {
            match appointments_api::mark_consulted(&appointment_id, &doctor_remarks).await {
                ApiResult::Success { .. } => {
                    set_notice.set(Some(("Appointment marked as consulted".to_string(), false)));
                    set_consulting.set(None);
                    set_remarks.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                ApiResult::Failure { error, .. } => {
                    set_notice.set(Some((format!("Failed to mark consulted: {}", error), true)));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <DashboardHeader title="Doctor Dashboard" />
            <Toast notice=notice />

            <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard label="Appointments today" value=Signal::derive(move || {
                        stats.get().map(|s| s.appointments_today.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Pending reviews" value=Signal::derive(move || {
                        stats.get().map(|s| s.pending_reviews.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Critical alerts" value=Signal::derive(move || {
                        stats.get().map(|s| s.critical_alerts.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Avg wait time" value=Signal::derive(move || {
                        stats.get().map(|s| s.avg_wait_time.clone()).unwrap_or_else(|| "—".to_string())
                    }) />
                </div>

                <div class="card bg-base-100 shadow-sm">
                    <div class="card-body">
                        <h2 class="card-title">"Appointments"</h2>

                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <span class="loading loading-spinner text-primary mx-auto my-8"></span> }
                        >
                            <div class="overflow-x-auto">
                                <table class="table table-sm">
                                    <thead>
                                        <tr>
                                            <th>"Patient"</th>
                                            <th>"Date"</th>
                                            <th>"Time"</th>
                                            <th>"Type"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || appointments.get().into_iter().map(|appointment| {
                                            // 诊断单元格：仅对待诊预约开放，展开后可填备注
                                            let consult_cell = {
                                                let id = appointment.id.clone();
                                                let status = appointment.status;
                                                move || {
                                                    if status != AppointmentStatus::Scheduled {
                                                        return ().into_any();
                                                    }
                                                    if consulting.get().as_deref() == Some(id.as_str()) {
                                                        let confirm_id = id.clone();
                                                        view! {
                                                            <div class="flex items-center gap-2">
                                                                <input
                                                                    type="text"
                                                                    class="input input-bordered input-xs"
                                                                    placeholder="Remarks (optional)"
                                                                    on:input=move |ev| set_remarks.set(event_target_value(&ev))
                                                                    prop:value=remarks
                                                                />
                                                                <button
                                                                    class="btn btn-xs btn-primary"
                                                                    on:click=move |_| confirm_consult(confirm_id.clone())
                                                                >
                                                                    "Done"
                                                                </button>
                                                            </div>
                                                        }
                                                        .into_any()
                                                    } else {
                                                        let open_id = id.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn-xs btn-outline"
                                                                on:click=move |_| set_consulting.set(Some(open_id.clone()))
                                                            >
                                                                "Consult"
                                                            </button>
                                                        }
                                                        .into_any()
                                                    }
                                                }
                                            };

                                            view! {
                                                <tr>
                                                    <td>{appointment.patient_name.clone().unwrap_or_else(|| appointment.patient_id.clone())}</td>
                                                    <td>{appointment.date.clone()}</td>
                                                    <td>{appointment.time.clone()}</td>
                                                    <td>{appointment.appointment_type.clone()}</td>
                                                    <td>{appointment.status.as_str()}</td>
                                                    <td>{consult_cell}</td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
