//! 预约挂号页（仅病人）

use crate::api::{ApiResult, CancelToken, auth_api};
use crate::components::layout::{DashboardHeader, Toast};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitalsfirst_shared::User;
use vitalsfirst_shared::protocol::BookAppointmentRequest;

#[component]
pub fn AppointmentBookingPage() -> impl IntoView {
    let router = use_router();

    let (doctors, set_doctors) = signal(Vec::<User>::new());
    let (doctor_id, set_doctor_id) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (time, set_time) = signal(String::new());
    let (appointment_type, set_appointment_type) = signal("consultation".to_string());
    let (condition, set_condition) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // 医生列表加载一次
    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            let cancel = cancel.clone();
            spawn_local(async move {
                let result = auth_api::get_doctors().await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    ApiResult::Success { data, .. } => set_doctors.set(data),
                    ApiResult::Failure { error, .. } => {
                        set_notice.set(Some((format!("Failed to load doctors: {}", error), true)));
                    }
                }
            });
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if doctor_id.get().is_empty()
            || date.get().is_empty()
            || time.get().is_empty()
            || condition.get().is_empty()
        {
            set_notice.set(Some(("Please fill in all required fields".to_string(), true)));
            return;
        }

        let notes_value = notes.get_untracked();
        let request = BookAppointmentRequest {
            doctor_id: doctor_id.get_untracked(),
            date: date.get_untracked(),
            time: time.get_untracked(),
            appointment_type: appointment_type.get_untracked(),
            condition: condition.get_untracked(),
            notes: if notes_value.is_empty() { None } else { Some(notes_value) },
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match auth_api::book_appointment(&request).await {
                ApiResult::Success { .. } => {
                    router.navigate(AppRoute::Patient);
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
            <DashboardHeader title="Book Appointment" />
            <Toast notice=notice />

            <div class="max-w-xl mx-auto p-4 md:p-8">
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="card-title">"New Appointment"</h2>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Doctor *"</span></label>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| set_doctor_id.set(event_target_value(&ev))
                                prop:value=doctor_id
                            >
                                <option value="">"Select a doctor"</option>
                                {move || doctors.get().into_iter().map(|doctor| view! {
                                    <option value=doctor.id.clone()>{doctor.name.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="grid grid-cols-2 gap-3">
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Date *"</span></label>
                                <input type="date" class="input input-bordered"
                                    on:input=move |ev| set_date.set(event_target_value(&ev))
                                    prop:value=date required />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Time *"</span></label>
                                <input type="time" class="input input-bordered"
                                    on:input=move |ev| set_time.set(event_target_value(&ev))
                                    prop:value=time required />
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Appointment type"</span></label>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| set_appointment_type.set(event_target_value(&ev))
                                prop:value=appointment_type
                            >
                                <option value="consultation">"Consultation"</option>
                                <option value="follow-up">"Follow-up"</option>
                                <option value="checkup">"Checkup"</option>
                            </select>
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Condition *"</span></label>
                            <input type="text" class="input input-bordered" placeholder="Reason for the visit"
                                on:input=move |ev| set_condition.set(event_target_value(&ev))
                                prop:value=condition required />
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Notes"</span></label>
                            <textarea class="textarea textarea-bordered"
                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                                prop:value=notes></textarea>
                        </div>

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Booking..." }.into_any()
                                } else {
                                    "Book Appointment".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
