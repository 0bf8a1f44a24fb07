//! 公共首页：角色入口

use crate::components::icons::{Activity, HeartPulse, ShieldCheck, Stethoscope, UserRound};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use vitalsfirst_shared::Role;

fn role_blurb(role: Role) -> &'static str {
    match role {
        Role::Nurse => "Triage patients and monitor vitals",
        Role::Doctor => "Review appointments and consult patients",
        Role::Administrator => "Manage staff and oversee operations",
        Role::Patient => "Book appointments and view your records",
    }
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
    let router = use_router();

    let icon = match role {
        Role::Nurse => view! { <Activity attr:class="h-8 w-8" /> }.into_any(),
        Role::Doctor => view! { <Stethoscope attr:class="h-8 w-8" /> }.into_any(),
        Role::Administrator => view! { <ShieldCheck attr:class="h-8 w-8" /> }.into_any(),
        Role::Patient => view! { <UserRound attr:class="h-8 w-8" /> }.into_any(),
    };

    view! {
        <button
            class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow text-left"
            on:click=move |_| router.navigate(AppRoute::Login(role))
        >
            <div class="card-body items-center text-center">
                <div class="p-3 bg-primary/10 rounded-2xl text-primary">{icon}</div>
                <h2 class="card-title">{role.title()}</h2>
                <p class="text-sm text-base-content/70">{role_blurb(role)}</p>
            </div>
        </button>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="min-h-screen bg-base-200 flex flex-col">
            <div class="hero flex-1">
                <div class="hero-content flex-col max-w-4xl w-full">
                    <div class="text-center mb-6">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <HeartPulse attr:class="h-10 w-10" />
                            </div>
                            <h1 class="text-4xl font-bold">"VitalsFirst"</h1>
                            <p class="text-base-content/70">
                                "Sign in with your role to access the portal"
                            </p>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 w-full">
                        <RoleCard role=Role::Nurse />
                        <RoleCard role=Role::Doctor />
                        <RoleCard role=Role::Administrator />
                        <RoleCard role=Role::Patient />
                    </div>

                    <p class="mt-6 text-sm text-base-content/70">
                        "New patient? "
                        <button
                            class="link link-primary"
                            on:click=move |_| router.navigate(AppRoute::RegisterPatient)
                        >
                            "Create an account"
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
