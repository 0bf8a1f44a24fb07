//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都
//! 集中在此模块。导航流程为 "请求 -> 守卫判定 -> 处理 -> 加载"；
//! 守卫判定委托给 `route` 层的纯逻辑，认证状态通过注入的会话
//! 信号获得，与认证系统解耦。

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, RouteAccess};
use crate::session::Session;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；会话信号由外部注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 注入的会话信号
    session: Signal<Session>,
}

impl RouterService {
    fn new(session: Signal<Session>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session,
        }
    }

    /// 当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 注入的会话信号（供出口组件做渲染期判定）
    pub fn session(&self) -> Signal<Session> {
        self.session
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, target: AppRoute) {
        self.navigate_to_route(target, true);
    }

    /// # Arguments
    /// * `use_push` - true 使用 pushState，false 使用 replaceState
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let session = self.session.get_untracked();

        // --- Step 1: 守卫判定 ---
        if let RouteAccess::RedirectToLanding = target.access_for(&session) {
            log!("[Router] access denied for {}, redirecting to landing", target);
            let redirect = AppRoute::guard_redirect();
            if use_push {
                push_history_state(&redirect.to_path());
            } else {
                replace_history_state(&redirect.to_path());
            }
            self.set_route.set(redirect);
            return;
        }

        // --- Step 2: 加载页面 ---
        if use_push {
            push_history_state(&target.to_path());
        } else {
            replace_history_state(&target.to_path());
        }
        self.set_route.set(target);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());

            // popstate 同样执行守卫判定
            match target.access_for(&session.get_untracked()) {
                RouteAccess::Allow => set_route.set(target),
                RouteAccess::RedirectToLanding => {
                    let redirect = AppRoute::guard_redirect();
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话状态变化时重新判定当前路由
    ///
    /// 登出或后端拒绝恢复的令牌后，所有受保护路由立即失效并
    /// 重定向回首页。
    fn setup_session_guard(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;

        Effect::new(move |_| {
            let session = session.get();
            let route = current_route.get_untracked();

            if !route.requires_auth() {
                return;
            }
            if let RouteAccess::RedirectToLanding = route.access_for(&session) {
                log!("[Router] session changed, leaving {}", route);
                let redirect = AppRoute::guard_redirect();
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: Signal<Session>) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.setup_session_guard();

    // 对初始 URL 也执行一次守卫（直接输入受保护地址的情况）
    let initial = router.current_route.get_untracked();
    router.navigate_to_route(initial, false);

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 会话信号
    session: Signal<Session>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件
///
/// 根据当前路由渲染对应视图。守卫在每次渲染重新判定：被拒绝
/// 的路由不渲染任何内容，重定向由会话守卫 Effect 完成。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        match current.access_for(&router.session().get()) {
            RouteAccess::Allow => matcher(current),
            RouteAccess::RedirectToLanding => ().into_any(),
        }
    }
}
