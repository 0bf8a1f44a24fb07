use super::*;
use vitalsfirst_shared::{Role, SessionSnapshot, User};

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

#[test]
fn authenticated_session_exposes_all_three_fields() {
    let session = Session::authenticated(nurse(), "t1".to_string());
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.id.as_str()), Some("2"));
    assert_eq!(session.role(), Some(Role::Nurse));
    assert_eq!(session.token(), Some("t1"));
}

#[test]
fn anonymous_session_exposes_nothing() {
    let session = Session::Anonymous;
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(session.role().is_none());
    assert!(session.token().is_none());
}

#[test]
fn snapshot_round_trip_preserves_triple() {
    let session = Session::authenticated(nurse(), "t1".to_string());
    let snapshot = session.to_snapshot();

    assert!(snapshot.is_authenticated);
    assert!(snapshot.user.is_some());
    assert_eq!(snapshot.token.as_deref(), Some("t1"));

    let restored = Session::from_snapshot(snapshot).expect("coherent snapshot restores");
    assert_eq!(restored, session);
}

#[test]
fn incoherent_snapshots_are_rejected() {
    // 标志位为真但缺少令牌
    assert_eq!(
        Session::from_snapshot(SessionSnapshot {
            user: Some(nurse()),
            token: None,
            is_authenticated: true,
        }),
        None
    );

    // 标志位为真但缺少用户
    assert_eq!(
        Session::from_snapshot(SessionSnapshot {
            user: None,
            token: Some("t1".to_string()),
            is_authenticated: true,
        }),
        None
    );

    // 标志位为假时即使字段齐全也不恢复
    assert_eq!(
        Session::from_snapshot(SessionSnapshot {
            user: Some(nurse()),
            token: Some("t1".to_string()),
            is_authenticated: false,
        }),
        None
    );
}

#[test]
fn anonymous_snapshot_is_fully_empty() {
    let snapshot = Session::Anonymous.to_snapshot();
    assert_eq!(snapshot.user, None);
    assert_eq!(snapshot.token, None);
    assert!(!snapshot.is_authenticated);
}

#[test]
fn login_sequence_only_accepts_latest_generation() {
    let sequence = LoginSequence::new();

    let first = sequence.begin();
    assert!(sequence.is_current(first));

    let second = sequence.begin();
    assert!(!sequence.is_current(first));
    assert!(sequence.is_current(second));
    assert!(second > first);
}
