use super::*;
use crate::session::Session;
use vitalsfirst_shared::User;

fn user_with_role(role: Role) -> User {
    User {
        id: "1".to_string(),
        username: format!("{}1", role.as_str()),
        email: format!("{}@vitalsfirst.com", role.as_str()),
        name: "Test User".to_string(),
        role,
        is_active: true,
        created_at: None,
    }
}

fn session_for(role: Role) -> Session {
    Session::authenticated(user_with_role(role), "t1".to_string())
}

const ALL_ROUTES: [AppRoute; 10] = [
    AppRoute::Landing,
    AppRoute::Login(Role::Nurse),
    AppRoute::RegisterPatient,
    AppRoute::BookAppointment,
    AppRoute::Nurse,
    AppRoute::Doctor,
    AppRoute::Administrator,
    AppRoute::AdministratorStaff,
    AppRoute::Patient,
    AppRoute::NotFound,
];

#[test]
fn paths_round_trip() {
    for route in ALL_ROUTES {
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }
}

#[test]
fn known_paths_parse() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Landing);
    assert_eq!(AppRoute::from_path("/login/nurse"), AppRoute::Login(Role::Nurse));
    assert_eq!(
        AppRoute::from_path("/login/administrator"),
        AppRoute::Login(Role::Administrator)
    );
    assert_eq!(AppRoute::from_path("/register/patient"), AppRoute::RegisterPatient);
    assert_eq!(AppRoute::from_path("/book-appointment"), AppRoute::BookAppointment);
    assert_eq!(AppRoute::from_path("/administrator/staff"), AppRoute::AdministratorStaff);
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(AppRoute::from_path("/nurse/"), AppRoute::Nurse);
    assert_eq!(AppRoute::from_path("/login/doctor/"), AppRoute::Login(Role::Doctor));
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(AppRoute::from_path("/pharmacy"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/login/janitor"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/login/"), AppRoute::NotFound);
}

#[test]
fn public_routes_allow_everyone() {
    let public = [AppRoute::Landing, AppRoute::Login(Role::Doctor), AppRoute::RegisterPatient, AppRoute::NotFound];
    for route in public {
        assert_eq!(route.access_for(&Session::Anonymous), RouteAccess::Allow);
        for role in Role::ALL {
            assert_eq!(route.access_for(&session_for(role)), RouteAccess::Allow);
        }
    }
}

#[test]
fn anonymous_is_denied_on_every_protected_route() {
    for route in ALL_ROUTES {
        if route.requires_auth() {
            assert_eq!(
                route.access_for(&Session::Anonymous),
                RouteAccess::RedirectToLanding,
                "anonymous should be redirected from {}",
                route
            );
        }
    }
}

#[test]
fn guard_matrix_over_all_roles_and_routes() {
    // 渲染当且仅当已认证且角色在允许集合内
    for route in ALL_ROUTES {
        let Some(allowed) = route.allowed_roles() else {
            continue;
        };
        for role in Role::ALL {
            let expected = if allowed.contains(&role) {
                RouteAccess::Allow
            } else {
                RouteAccess::RedirectToLanding
            };
            assert_eq!(
                route.access_for(&session_for(role)),
                expected,
                "role {} on {}",
                role,
                route
            );
        }
    }
}

#[test]
fn nurse_login_scenario() {
    // 以 nurse 身份登录后：/doctor 被重定向，/nurse 正常渲染
    let session = session_for(Role::Nurse);
    assert_eq!(
        AppRoute::from_path("/doctor").access_for(&session),
        RouteAccess::RedirectToLanding
    );
    assert_eq!(
        AppRoute::from_path("/nurse").access_for(&session),
        RouteAccess::Allow
    );
}

#[test]
fn each_role_has_a_dashboard() {
    assert_eq!(AppRoute::dashboard_for(Role::Nurse), AppRoute::Nurse);
    assert_eq!(AppRoute::dashboard_for(Role::Doctor), AppRoute::Doctor);
    assert_eq!(AppRoute::dashboard_for(Role::Administrator), AppRoute::Administrator);
    assert_eq!(AppRoute::dashboard_for(Role::Patient), AppRoute::Patient);

    for role in Role::ALL {
        let dashboard = AppRoute::dashboard_for(role);
        assert_eq!(dashboard.access_for(&session_for(role)), RouteAccess::Allow);
    }
}

#[test]
fn guard_redirect_targets_landing() {
    assert_eq!(AppRoute::guard_redirect(), AppRoute::Landing);
}
