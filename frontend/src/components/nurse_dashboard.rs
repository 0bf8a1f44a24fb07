//! 护士工作台：分诊队列、生命体征概览、提醒流

use crate::api::{ApiResult, CancelToken, alerts_api, dashboard_api, triage_api};
use crate::components::icons::Bell;
use crate::components::layout::{DashboardHeader, StatCard, Toast};
use crate::web::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalsfirst_shared::{Alert, NurseStats, TriagePriority, TriageRecord, TriageStatus};

/// 提醒流的刷新间隔（毫秒）
const ALERT_REFRESH_MILLIS: u32 = 30_000;

fn priority_badge(priority: TriagePriority) -> &'static str {
    match priority {
        TriagePriority::Critical => "badge badge-error",
        TriagePriority::High => "badge badge-warning",
        TriagePriority::Medium => "badge badge-info",
        TriagePriority::Low => "badge badge-ghost",
    }
}

#[component]
pub fn NurseDashboardPage() -> impl IntoView {
    let (stats, set_stats) = signal(Option::<NurseStats>::None);
    let (records, set_records) = signal(Vec::<TriageRecord>::new());
    let (alerts, set_alerts) = signal(Vec::<Alert>::new());
    let (loading_records, set_loading_records) = signal(true);
    let (priority_filter, set_priority_filter) = signal(String::new());
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    // 重新加载的触发器：动作完成后自增即可
    let (triage_reload, set_triage_reload) = signal(0u32);
    let (alerts_reload, set_alerts_reload) = signal(0u32);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // 统计数据加载一次
    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            let cancel = cancel.clone();
            spawn_local(async move {
                let result = dashboard_api::stats::<NurseStats>().await;
                if cancel.is_cancelled() {
                    return;
                }
                if let ApiResult::Success { data, .. } = result {
                    set_stats.set(Some(data));
                }
            });
        }
    });

    // 分诊队列：跟随过滤器与触发器
    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            triage_reload.get();
            let priority = TriagePriority::parse(&priority_filter.get());
            let cancel = cancel.clone();
            set_loading_records.set(true);
            spawn_local(async move {
                let result = triage_api::list(priority, None).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    ApiResult::Success { data, .. } => set_records.set(data),
                    ApiResult::Failure { error, .. } => {
                        set_notice.set(Some((format!("Failed to load triage queue: {}", error), true)));
                    }
                }
                set_loading_records.set(false);
            });
        }
    });

    // 未读提醒：跟随触发器，并由定时器周期性刷新
    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            alerts_reload.get();
            let cancel = cancel.clone();
            spawn_local(async move {
                let result = alerts_api::list(true).await;
                if cancel.is_cancelled() {
                    return;
                }
                if let ApiResult::Success { data, .. } = result {
                    set_alerts.set(data);
                }
            });
        }
    });

    // 定时器存放在线程本地槽位中，卸载时取出丢弃即停止
    let interval = StoredValue::new_local(Interval::new(ALERT_REFRESH_MILLIS, move || {
        set_alerts_reload.update(|n| *n += 1);
    }));
    on_cleanup(move || {
        interval.update_value(|i| {
            i.take();
        });
    });

    let advance_status = move |record: TriageRecord| {
        let next = record.status.next();
        spawn_local(async move {
            match triage_api::update_status(&record.id, next).await {
                ApiResult::Success { .. } => {
                    set_notice.set(Some(("Triage record updated".to_string(), false)));
                    set_triage_reload.update(|n| *n += 1);
                }
                ApiResult::Failure { error, .. } => {
                    set_notice.set(Some((format!("Failed to update record: {}", error), true)));
                }
            }
        });
    };

    let mark_alert_read = move |alert_id: String| {
        spawn_local(async move {
            if alerts_api::mark_read(&alert_id).await.is_success() {
                set_alerts_reload.update(|n| *n += 1);
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <DashboardHeader title="Nurse Dashboard" />
            <Toast notice=notice />

            <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
                // 统计卡片
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard label="Active patients" value=Signal::derive(move || {
                        stats.get().map(|s| s.active_patients.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Critical cases" value=Signal::derive(move || {
                        stats.get().map(|s| s.critical_cases.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Triage queue" value=Signal::derive(move || {
                        stats.get().map(|s| s.triage_queue.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                    <StatCard label="Appointments today" value=Signal::derive(move || {
                        stats.get().map(|s| s.appointments_today.to_string()).unwrap_or_else(|| "—".to_string())
                    }) />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    // 分诊队列
                    <div class="card bg-base-100 shadow-sm lg:col-span-2">
                        <div class="card-body">
                            <div class="flex items-center justify-between">
                                <h2 class="card-title">"Triage Queue"</h2>
                                <select
                                    class="select select-bordered select-sm"
                                    on:change=move |ev| set_priority_filter.set(event_target_value(&ev))
                                    prop:value=priority_filter
                                >
                                    <option value="">"All priorities"</option>
                                    {TriagePriority::ALL.into_iter().map(|p| view! {
                                        <option value=p.as_str()>{p.as_str()}</option>
                                    }).collect_view()}
                                </select>
                            </div>

                            <Show
                                when=move || !loading_records.get()
                                fallback=|| view! { <span class="loading loading-spinner text-primary mx-auto my-8"></span> }
                            >
                                <div class="overflow-x-auto">
                                    <table class="table table-sm">
                                        <thead>
                                            <tr>
                                                <th>"Patient"</th>
                                                <th>"Vitals"</th>
                                                <th>"Symptoms"</th>
                                                <th>"Priority"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {move || records.get().into_iter().map(|record| {
                                                let advance_cell = if record.status != TriageStatus::Completed {
                                                    let row = record.clone();
                                                    view! {
                                                        <button
                                                            class="btn btn-xs btn-outline"
                                                            on:click=move |_| advance_status(row.clone())
                                                        >
                                                            "Advance"
                                                        </button>
                                                    }
                                                    .into_any()
                                                } else {
                                                    ().into_any()
                                                };

                                                view! {
                                                    <tr>
                                                        <td>{record.patient_name.clone().unwrap_or_else(|| record.patient_id.clone())}</td>
                                                        <td class="text-xs">
                                                            {format!("BP {} · HR {} · SpO2 {}%",
                                                                record.blood_pressure, record.heart_rate, record.oxygen_saturation)}
                                                        </td>
                                                        <td>{record.symptoms.clone()}</td>
                                                        <td><span class=priority_badge(record.priority)>{record.priority.as_str()}</span></td>
                                                        <td>{record.status.as_str()}</td>
                                                        <td>{advance_cell}</td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            </Show>
                        </div>
                    </div>

                    // 未读提醒
                    <div class="card bg-base-100 shadow-sm">
                        <div class="card-body">
                            <h2 class="card-title">
                                <Bell attr:class="h-5 w-5" />
                                "Alerts"
                            </h2>
                            <Show
                                when=move || !alerts.get().is_empty()
                                fallback=|| view! { <p class="text-sm text-base-content/60">"No unread alerts"</p> }
                            >
                                <ul class="space-y-2">
                                    {move || alerts.get().into_iter().map(|alert| {
                                        let id = alert.id.clone();
                                        view! {
                                            <li class="p-3 rounded-lg bg-base-200">
                                                <div class="flex items-start justify-between gap-2">
                                                    <div>
                                                        <p class="font-semibold text-sm">{alert.title.clone()}</p>
                                                        <p class="text-xs text-base-content/70">{alert.message.clone()}</p>
                                                    </div>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| mark_alert_read(id.clone())
                                                    >
                                                        "Dismiss"
                                                    </button>
                                                </div>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
