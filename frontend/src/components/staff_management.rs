//! 人员管理页（仅管理员）：员工列表与新员工注册

use crate::api::{ApiResult, CancelToken, auth_api, users_api};
use crate::components::layout::{DashboardHeader, Toast};
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalsfirst_shared::protocol::RegisterStaffRequest;
use vitalsfirst_shared::{Role, User};

#[component]
pub fn StaffManagementPage() -> impl IntoView {
    let (staff, set_staff) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);
    let (reload, set_reload) = signal(0u32);

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (role, set_role) = signal("nurse".to_string());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            reload.get();
            let cancel = cancel.clone();
            set_loading.set(true);
            spawn_local(async move {
                let result = users_api::list(0, 100).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    ApiResult::Success { data, .. } => {
                        // 人员管理只关心员工账号
                        set_staff.set(
                            data.into_iter()
                                .filter(|u| u.role != Role::Patient)
                                .collect(),
                        );
                    }
                    ApiResult::Failure { error, .. } => {
                        set_notice.set(Some((format!("Failed to load staff: {}", error), true)));
                    }
                }
                set_loading.set(false);
            });
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if username.get().is_empty()
            || email.get().is_empty()
            || name.get().is_empty()
            || password.get().is_empty()
        {
            set_notice.set(Some(("Please fill in all fields".to_string(), true)));
            return;
        }
        let Some(role) = Role::parse(&role.get()) else {
            set_notice.set(Some(("Please choose a role".to_string(), true)));
            return;
        };

        let request = RegisterStaffRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            name: name.get_untracked(),
            role,
            password: password.get_untracked(),
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match auth_api::register(&request).await {
                ApiResult::Success { .. } => {
                    set_notice.set(Some(("Staff member registered".to_string(), false)));
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_name.set(String::new());
                    set_password.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                ApiResult::Failure { error, status } => {
                    let message = if status == 0 {
                        "Failed to connect to the server".to_string()
                    } else {
                        error
                    };
                    set_notice.set(Some((message, true)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <DashboardHeader title="Staff Management" />
            <Toast notice=notice />

            <div class="max-w-7xl mx-auto p-4 md:p-8 grid grid-cols-1 lg:grid-cols-3 gap-6">
                // 员工列表
                <div class="card bg-base-100 shadow-sm lg:col-span-2">
                    <div class="card-body">
                        <h2 class="card-title">"Staff"</h2>
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
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || staff.get().into_iter().map(|member| view! {
                                            <tr>
                                                <td>{member.name.clone()}</td>
                                                <td>{member.username.clone()}</td>
                                                <td>{member.email.clone()}</td>
                                                <td><span class="badge badge-ghost">{member.role.title()}</span></td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </Show>
                    </div>
                </div>

                // 新员工注册
                <div class="card bg-base-100 shadow-sm">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="card-title">"Register Staff"</h2>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Full name"</span></label>
                            <input type="text" class="input input-bordered"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name required />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Username"</span></label>
                            <input type="text" class="input input-bordered"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username required />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Email"</span></label>
                            <input type="email" class="input input-bordered"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email required />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Role"</span></label>
                            <select class="select select-bordered"
                                on:change=move |ev| set_role.set(event_target_value(&ev))
                                prop:value=role
                            >
                                <option value="nurse">"Nurse"</option>
                                <option value="doctor">"Doctor"</option>
                                <option value="administrator">"Administrator"</option>
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Password"</span></label>
                            <input type="password" class="input input-bordered"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password required />
                        </div>

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Registering..." }.into_any()
                                } else {
                                    "Register".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
