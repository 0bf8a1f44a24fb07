use super::*;
use crate::protocol::{
    BookAppointmentRequest, ConsultRequest, LoginRequest, LoginResponse, RegisterPatientRequest,
};

fn sample_user() -> User {
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
fn role_serializes_lowercase() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", role.as_str()));
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}

#[test]
fn role_parse_rejects_unknown() {
    assert_eq!(Role::parse("nurse"), Some(Role::Nurse));
    assert_eq!(Role::parse("Nurse"), None);
    assert_eq!(Role::parse("janitor"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn snapshot_round_trips_unchanged() {
    let snapshot = SessionSnapshot {
        user: Some(sample_user()),
        token: Some("t1".to_string()),
        is_authenticated: true,
    };

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_uses_camel_case_flag() {
    let snapshot = SessionSnapshot {
        user: None,
        token: None,
        is_authenticated: false,
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"isAuthenticated\":false"));
}

#[test]
fn login_response_decodes_backend_shape() {
    let json = r#"{
        "access_token": "t1",
        "token_type": "bearer",
        "user": {
            "id": "2",
            "username": "nurse1",
            "email": "sarah@vitalsfirst.com",
            "name": "Sarah Johnson",
            "role": "nurse",
            "is_active": true,
            "created_at": "2026-01-01T08:00:00"
        }
    }"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.access_token, "t1");
    assert_eq!(response.user.role, Role::Nurse);
    assert_eq!(response.user.name, "Sarah Johnson");
}

#[test]
fn login_request_carries_role() {
    let request = LoginRequest {
        username: "nurse1".to_string(),
        password: "nurse123".to_string(),
        role: Role::Nurse,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"role\":\"nurse\""));
}

#[test]
fn triage_status_uses_kebab_case() {
    let json = serde_json::to_string(&TriageStatus::InProgress).unwrap();
    assert_eq!(json, "\"in-progress\"");
    let back: TriageStatus = serde_json::from_str("\"in-progress\"").unwrap();
    assert_eq!(back, TriageStatus::InProgress);
}

#[test]
fn triage_status_advances_and_saturates() {
    assert_eq!(TriageStatus::Pending.next(), TriageStatus::InProgress);
    assert_eq!(TriageStatus::InProgress.next(), TriageStatus::Completed);
    assert_eq!(TriageStatus::Completed.next(), TriageStatus::Completed);
}

#[test]
fn absent_optional_fields_are_omitted() {
    let request = RegisterPatientRequest {
        username: "patient9".to_string(),
        email: "p9@example.com".to_string(),
        name: "Pat Nine".to_string(),
        password: "secret".to_string(),
        age: None,
        gender: None,
        medical_history: None,
        contact_number: None,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(!json.contains("age"));
    assert!(!json.contains("gender"));
    assert!(!json.contains("medical_history"));
    assert!(!json.contains("contact_number"));

    let booking = BookAppointmentRequest {
        doctor_id: "3".to_string(),
        date: "2026-08-10".to_string(),
        time: "10:30".to_string(),
        appointment_type: "consultation".to_string(),
        condition: "headache".to_string(),
        notes: None,
    };
    let json = serde_json::to_string(&booking).unwrap();
    assert!(!json.contains("notes"));
}

#[test]
fn consult_request_always_sends_remarks() {
    let request = ConsultRequest {
        doctor_remarks: String::new(),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, "{\"doctor_remarks\":\"\"}");
}

#[test]
fn appointment_decodes_without_display_fields() {
    let json = r#"{
        "id": "a1",
        "patient_id": "4",
        "doctor_id": "3",
        "date": "2026-08-10",
        "time": "10:30",
        "appointment_type": "consultation",
        "status": "scheduled"
    }"#;

    let appointment: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.patient_name, None);
    assert_eq!(appointment.doctor_remarks, None);
}
