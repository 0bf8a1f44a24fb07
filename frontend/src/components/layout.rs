//! 页面公共部件：顶栏、统计卡片、通知提示

use crate::auth::{logout, use_auth};
use crate::components::icons::{HeartPulse, LogOut};
use leptos::prelude::*;

/// 工作台顶栏
///
/// 显示标题与当前用户，并提供登出入口。登出后的离场导航由
/// 路由服务的会话守卫完成。
#[component]
pub fn DashboardHeader(
    /// 页面标题
    title: &'static str,
) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    let user_line = move || {
        state
            .get()
            .session
            .user()
            .map(|u| format!("{} · {}", u.name, u.role.title()))
            .unwrap_or_default()
    };

    let on_logout = move |_| logout(&auth);

    view! {
        <div class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-1 flex items-center gap-2">
                <div class="p-2 bg-primary/10 rounded-xl text-primary">
                    <HeartPulse attr:class="h-6 w-6" />
                </div>
                <span class="text-xl font-bold">"VitalsFirst"</span>
                <span class="text-base-content/60 ml-2">{title}</span>
            </div>
            <div class="flex-none flex items-center gap-3">
                <span class="text-sm text-base-content/70">{user_line}</span>
                <button class="btn btn-ghost btn-sm" on:click=on_logout>
                    <LogOut attr:class="h-4 w-4" />
                    "Sign out"
                </button>
            </div>
        </div>
    }
}

/// 统计卡片
#[component]
pub fn StatCard(
    /// 指标名称
    label: &'static str,
    /// 指标值
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body p-4">
                <span class="text-sm text-base-content/60">{label}</span>
                <span class="text-2xl font-bold">{move || value.get()}</span>
            </div>
        </div>
    }
}

/// 页面级通知提示框
///
/// `notice` 为 `(消息, 是否错误)`；页面自行在动作结束后写入。
#[component]
pub fn Toast(notice: ReadSignal<Option<(String, bool)>>) -> impl IntoView {
    view! {
        <Show when=move || notice.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if notice.get().map(|(_, is_err)| is_err).unwrap_or(false) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
