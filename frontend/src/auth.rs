//! 认证模块
//!
//! 会话状态的唯一所有者：登录、登出、启动时的恢复与核验都经由
//! 此处；持久化快照键也只有这里读写（API 客户端通过
//! [`stored_token`] 取令牌）。路由系统只消费注入的会话信号。

use crate::api::{ApiResult, auth_api};
use crate::session::{LoginSequence, Session};
use crate::web::LocalStorage;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use vitalsfirst_shared::protocol::LoginResponse;
use vitalsfirst_shared::{Role, SessionSnapshot};

const STORAGE_AUTH_KEY: &str = "vitalsfirst_auth";

/// 认证状态
///
/// `is_loading` 为真表示启动恢复尚未结束（Restoring）；此时
/// `session` 可能是乐观采用、等待后端核验的快照会话。
#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub session: Session,
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::Anonymous,
            is_loading: true,
        }
    }
}

/// 认证上下文
///
/// 包含读写信号与登录序列，通过 Context 在组件间共享。
#[derive(Clone)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
    /// 登录请求序列（并发登录去抖）
    logins: Arc<LoginSequence>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self {
            state,
            set_state,
            logins: Arc::new(LoginSequence::new()),
        }
    }

    /// 会话信号（用于注入路由服务）
    pub fn session_signal(&self) -> Signal<Session> {
        let state = self.state;
        Signal::derive(move || state.get().session)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

// =========================================================
// 持久化快照的窄接口（此模块之外不直接碰存储键）
// =========================================================

fn load_session() -> Option<Session> {
    let raw = LocalStorage::get(STORAGE_AUTH_KEY)?;
    let snapshot: SessionSnapshot = serde_json::from_str(&raw).ok()?;
    Session::from_snapshot(snapshot)
}

fn save_session(session: &Session) {
    if let Ok(json) = serde_json::to_string(&session.to_snapshot()) {
        LocalStorage::set(STORAGE_AUTH_KEY, &json);
    }
}

fn clear_session() {
    LocalStorage::delete(STORAGE_AUTH_KEY);
}

/// 供 API 客户端读取持久化令牌（只读，不触碰内存状态）
pub(crate) fn stored_token() -> Option<String> {
    let session = load_session()?;
    session.token().map(str::to_string)
}

// =========================================================
// 生命周期操作
// =========================================================

/// 初始化认证状态
///
/// 存在持久化快照时先乐观采用（避免已登录用户刷新后闪现未
/// 认证界面），同时向后端发起 "我是谁" 核验：
/// - 应用层拒绝（状态码非 0）→ 清空内存与存储；
/// - 传输层失败（后端不可达）→ 保留乐观会话，后续请求自会失败。
pub fn init_auth(ctx: &AuthContext) {
    let set_state = ctx.set_state;

    let Some(session) = load_session() else {
        set_state.update(|s| s.is_loading = false);
        return;
    };

    // 先采用，再核验；顺序不可颠倒
    set_state.update(|s| {
        s.session = session;
        s.is_loading = true;
    });

    spawn_local(async move {
        match auth_api::get_current_user().await {
            ApiResult::Success { .. } => {
                set_state.update(|s| s.is_loading = false);
            }
            ApiResult::Failure { status, .. } if status != 0 => {
                log!("[Auth] stored session rejected by backend, clearing");
                clear_session();
                set_state.set(AuthState {
                    session: Session::Anonymous,
                    is_loading: false,
                });
            }
            ApiResult::Failure { .. } => {
                log!("[Auth] backend unreachable, keeping restored session");
                set_state.update(|s| s.is_loading = false);
            }
        }
    });
}

/// 登录
///
/// 成功时整体采用返回的身份与令牌并持久化；失败时状态保持
/// 不变、不产生任何存储写入。返回登录是否成功。
pub async fn login(ctx: &AuthContext, username: String, password: String, role: Role) -> bool {
    let generation = ctx.logins.begin();
    let result = auth_api::login(&username, &password, role).await;
    finish_login(ctx, generation, result)
}

/// 应用一次登录结果
///
/// 只有代号仍是最新的成功结果才会写入状态与存储；过期结果
/// 一律按失败处理。
fn finish_login(ctx: &AuthContext, generation: u64, result: ApiResult<LoginResponse>) -> bool {
    let ApiResult::Success { data, .. } = result else {
        return false;
    };

    if !ctx.logins.is_current(generation) {
        log!("[Auth] discarding stale login result");
        return false;
    }

    let session = Session::authenticated(data.user, data.access_token);
    save_session(&session);
    ctx.set_state.update(|s| {
        s.session = session;
        s.is_loading = false;
    });
    true
}

/// 登出：同步清空内存与持久化快照，无网络副作用。
/// 受保护页面的离场由路由服务的会话守卫自动完成。
pub fn logout(ctx: &AuthContext) {
    clear_session();
    ctx.set_state.set(AuthState {
        session: Session::Anonymous,
        is_loading: false,
    });
}

#[cfg(test)]
mod tests;
