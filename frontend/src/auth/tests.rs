use super::*;
use crate::api::ApiResult;
use vitalsfirst_shared::User;
use vitalsfirst_shared::protocol::LoginResponse;

fn nurse() -> User {
    User {
        id: "2".to_string(),
        username: "nurse1".to_string(),
        email: "sarah@vitalsfirst.com".to_string(),
        name: "Sarah Johnson".to_string(),
        role: Role::Nurse,
        is_active: true,
        created_at: None,
    }
}

fn success(status: u16) -> ApiResult<LoginResponse> {
    ApiResult::Success {
        data: LoginResponse {
            access_token: "t1".to_string(),
            token_type: "bearer".to_string(),
            user: nurse(),
        },
        status,
    }
}

#[test]
fn default_state_starts_restoring() {
    let state = AuthState::default();
    assert!(state.is_loading);
    assert!(!state.session.is_authenticated());
}

#[test]
fn successful_login_adopts_session_atomically() {
    let ctx = AuthContext::new();
    let generation = ctx.logins.begin();

    assert!(finish_login(&ctx, generation, success(200)));

    let state = ctx.state.get_untracked();
    assert!(!state.is_loading);
    assert!(state.session.is_authenticated());
    assert_eq!(state.session.token(), Some("t1"));
    assert_eq!(state.session.role(), Some(Role::Nurse));
}

#[test]
fn failed_login_leaves_state_untouched() {
    let ctx = AuthContext::new();
    let generation = ctx.logins.begin();

    let result = ApiResult::Failure {
        error: "Incorrect username, password, or role".to_string(),
        status: 401,
    };
    assert!(!finish_login(&ctx, generation, result));

    let state = ctx.state.get_untracked();
    assert!(!state.session.is_authenticated());
    assert!(state.session.user().is_none());
    assert!(state.session.token().is_none());
}

#[test]
fn transport_failure_is_also_a_failed_login() {
    let ctx = AuthContext::new();
    let generation = ctx.logins.begin();

    assert!(!finish_login(&ctx, generation, ApiResult::transport_failure("offline")));
    assert!(!ctx.state.get_untracked().session.is_authenticated());
}

#[test]
fn stale_login_result_is_discarded() {
    let ctx = AuthContext::new();

    // 第一次尝试尚未返回时又发起了第二次
    let first = ctx.logins.begin();
    let _second = ctx.logins.begin();

    // 迟到的第一次成功结果不得落入状态
    assert!(!finish_login(&ctx, first, success(200)));
    assert!(!ctx.state.get_untracked().session.is_authenticated());
}

#[test]
fn latest_login_result_still_applies() {
    let ctx = AuthContext::new();

    let _first = ctx.logins.begin();
    let second = ctx.logins.begin();

    assert!(finish_login(&ctx, second, success(200)));
    assert!(ctx.state.get_untracked().session.is_authenticated());
}

#[test]
fn logout_resets_to_anonymous() {
    let ctx = AuthContext::new();
    let generation = ctx.logins.begin();
    assert!(finish_login(&ctx, generation, success(200)));

    logout(&ctx);

    let state = ctx.state.get_untracked();
    assert!(!state.is_loading);
    assert!(!state.session.is_authenticated());
    assert!(state.session.user().is_none());
    assert!(state.session.token().is_none());
}

#[test]
fn session_signal_tracks_state() {
    let ctx = AuthContext::new();
    let session = ctx.session_signal();
    assert!(!session.get_untracked().is_authenticated());

    let generation = ctx.logins.begin();
    finish_login(&ctx, generation, success(200));
    assert!(session.get_untracked().is_authenticated());
}
