//! 病人自助注册页

use crate::api::{ApiResult, auth_api};
use crate::components::icons::UserRound;
use crate::components::layout::Toast;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalsfirst_shared::Role;
use vitalsfirst_shared::protocol::RegisterPatientRequest;

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[component]
pub fn PatientRegistrationPage() -> impl IntoView {
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (gender, set_gender) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (history, set_history) = signal(String::new());

    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        // 本地校验通过前不发出任何请求
        if username.get().is_empty()
            || email.get().is_empty()
            || name.get().is_empty()
            || password.get().is_empty()
        {
            set_notice.set(Some(("Please fill in all required fields".to_string(), true)));
            return;
        }
        if password.get() != confirm.get() {
            set_notice.set(Some(("Passwords do not match".to_string(), true)));
            return;
        }

        let request = RegisterPatientRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            name: name.get_untracked(),
            password: password.get_untracked(),
            age: age.get_untracked().parse().ok(),
            gender: optional(gender.get_untracked()),
            medical_history: optional(history.get_untracked()),
            contact_number: optional(contact.get_untracked()),
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match auth_api::register_patient(&request).await {
                ApiResult::Success { .. } => {
                    router.navigate(AppRoute::Login(Role::Patient));
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
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-lg">
                <Toast notice=notice />

                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <UserRound attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Patient Registration"</h1>
                        <p class="text-base-content/70">"Create your VitalsFirst account"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Username *"</span></label>
                                <input type="text" class="input input-bordered"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username required />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Email *"</span></label>
                                <input type="email" class="input input-bordered"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email required />
                            </div>
                            <div class="form-control sm:col-span-2">
                                <label class="label"><span class="label-text">"Full name *"</span></label>
                                <input type="text" class="input input-bordered"
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    prop:value=name required />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Password *"</span></label>
                                <input type="password" class="input input-bordered"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password required />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Confirm password *"</span></label>
                                <input type="password" class="input input-bordered"
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    prop:value=confirm required />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Age"</span></label>
                                <input type="number" class="input input-bordered"
                                    on:input=move |ev| set_age.set(event_target_value(&ev))
                                    prop:value=age />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Gender"</span></label>
                                <input type="text" class="input input-bordered"
                                    on:input=move |ev| set_gender.set(event_target_value(&ev))
                                    prop:value=gender />
                            </div>
                            <div class="form-control sm:col-span-2">
                                <label class="label"><span class="label-text">"Contact number"</span></label>
                                <input type="tel" class="input input-bordered"
                                    on:input=move |ev| set_contact.set(event_target_value(&ev))
                                    prop:value=contact />
                            </div>
                            <div class="form-control sm:col-span-2">
                                <label class="label"><span class="label-text">"Medical history"</span></label>
                                <textarea class="textarea textarea-bordered"
                                    on:input=move |ev| set_history.set(event_target_value(&ev))
                                    prop:value=history></textarea>
                            </div>
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
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
