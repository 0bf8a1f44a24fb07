//! 管理员工作台：运营统计与用户概览

use crate::api::{ApiResult, CancelToken, dashboard_api, users_api};
use crate::components::layout::{DashboardHeader, StatCard, Toast};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalsfirst_shared::{AdminStats, User};

#[component]
pub fn AdministratorDashboardPage() -> impl IntoView {
    let router = use_router();

    let (stats, set_stats) = signal(Option::<AdminStats>::None);
    let (users, set_users) = signal(Vec::<User>::new());
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
                let result = dashboard_api::stats::<AdminStats>().await;
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
            let cancel = cancel.clone();
            spawn_local(async move {
                let result = users_api::list(0, 100).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    ApiResult::Success { data, .. } => set_users.set(data),
                    ApiResult::Failure { error, .. } => {
                        set_notice.set(Some((format!("Failed to load users: {}", error), true)));
                    }
                }
                set_loading.set(false);
            });
        }
    });

    view! {
        <div class="min-h-screen bg-base-200">
            <DashboardHeader title="Administrator Dashboard" />
            <Toast notice=notice />

            <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard label="Total patients" value=Signal::derive(move || {
                        stats.get().map(|s| s.total_patients.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Active staff" value=Signal::derive(move || {
                        stats.get().map(|s| s.active_staff.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="System alerts" value=Signal::derive(move || {
                        stats.get().map(|s| s.system_alerts.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Appointments this month" value=Signal::derive(move || {
                        stats.get().map(|s| s.monthly_appointments.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                </div>

                <div class="card bg-base-100 shadow-sm">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <h2 class="card-title">"Registered Users"</h2>
                            <button
                                class="btn btn-primary btn-sm"
                                on:click=move |_| router.navigate(AppRoute::AdministratorStaff)
                            >
                                "Manage staff"
                            </button>
                        </div>

                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <span class="loading loading-spinner text-primary mx-auto my-8"></span> }
                        >
                            <div class="overflow-x-auto">
                                <table class="table table-sm">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Username"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                            <th>"Active"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || users.get().into_iter().map(|user| view! {
                                            <tr>
                                                <td>{user.name.clone()}</td>
                                                <td>{user.username.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td><span class="badge badge-ghost">{user.role.title()}</span></td>
                                                <td>{if user.is_active { "yes" } else { "no" }}</td>
                                            </tr>
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
