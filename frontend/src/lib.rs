//! VitalsFirst 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `session`: 会话状态机（纯领域模型）
//! - `auth`: 认证状态管理与持久化
//! - `api`: 统一的后端访问层（客户端 + 资源门面）
//! - `web::route` / `web::router`: 角色守卫路由
//! - `components`: UI 组件层

pub mod api;
mod auth;
mod components {
    pub mod admin_dashboard;
    pub mod book_appointment;
    mod icons;
    pub mod landing;
    mod layout;
    pub mod login;
    pub mod nurse_dashboard;
    pub mod doctor_dashboard;
    pub mod patient_dashboard;
    pub mod register_patient;
    pub mod staff_management;
}
mod session;

use crate::auth::{AuthContext, init_auth};
use crate::components::admin_dashboard::AdministratorDashboardPage;
use crate::components::book_appointment::AppointmentBookingPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::nurse_dashboard::NurseDashboardPage;
use crate::components::doctor_dashboard::DoctorDashboardPage;
use crate::components::patient_dashboard::PatientDashboardPage;
use crate::components::register_patient::PatientRegistrationPage;
use crate::components::staff_management::StaffManagementPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 对浏览器原生 API 的轻量级封装，非 WASM 目标下降级为惰性实现，
// 让纯逻辑层可以在原生环境测试。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::{HttpClient, HttpMethod};
    pub use storage::LocalStorage;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件；守卫判定发生在
/// 路由服务与出口组件中，这里只做映射。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login(role) => view! { <LoginPage role=role /> }.into_any(),
        AppRoute::RegisterPatient => view! { <PatientRegistrationPage /> }.into_any(),
        AppRoute::BookAppointment => view! { <AppointmentBookingPage /> }.into_any(),
        AppRoute::Nurse => view! { <NurseDashboardPage /> }.into_any(),
        AppRoute::Doctor => view! { <DoctorDashboardPage /> }.into_any(),
        AppRoute::Administrator => view! { <AdministratorDashboardPage /> }.into_any(),
        AppRoute::AdministratorStaff => view! { <StaffManagementPage /> }.into_any(),
        AppRoute::Patient => view! { <PatientDashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx.clone());

    // 2. 初始化认证状态（乐观恢复持久化会话并发起核验）
    init_auth(&auth_ctx);

    // 3. 会话信号注入路由服务，实现守卫与认证系统解耦
    let session = auth_ctx.session_signal();

    view! {
        <Router session=session>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
