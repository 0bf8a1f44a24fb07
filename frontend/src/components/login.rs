//! 按角色区分的登录页

use crate::auth::{login, use_auth};
use crate::components::icons::HeartPulse;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalsfirst_shared::Role;

#[component]
pub fn LoginPage(
    /// 路由参数解析出的目标角色
    role: Role,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let auth_state = auth.state;

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 已认证用户直接进入自己的工作台
    Effect::new(move |_| {
        let state = auth_state.get();
        if !state.is_loading {
            if let Some(session_role) = state.session.role() {
                router.navigate(AppRoute::dashboard_for(session_role));
            }
        }
    });

    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            // 表单校验在任何网络调用之前完成
            if username.get().is_empty() || password.get().is_empty() {
                set_error_msg.set(Some("Please fill in all fields".to_string()));
                return;
            }

            set_is_submitting.set(true);
            set_error_msg.set(None);

            let auth = auth.clone();
            spawn_local(async move {
                let success = login(&auth, username.get_untracked(), password.get_untracked(), role).await;
                if success {
                    router.navigate(AppRoute::dashboard_for(role));
                } else {
                    set_error_msg.set(Some(
                        "Invalid credentials. Please try again.".to_string(),
                    ));
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <HeartPulse attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">{format!("{} Sign In", role.title())}</h1>
                        <p class="text-base-content/70">"Enter your credentials to continue"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
