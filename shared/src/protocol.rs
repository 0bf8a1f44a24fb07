//! 请求/响应载荷定义
//!
//! 与后端各端点交换的 JSON 结构。可选字段缺省时整体省略，
//! 不会发出空键。

use crate::{
    AlertKind, Appointment, AppointmentStatus, Role, TriagePriority, TriageStatus, User,
};
use serde::{Deserialize, Serialize};

// =========================================================
// Auth
// =========================================================

/// POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user: User,
}

/// POST /auth/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterStaffRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password: String,
}

/// POST /auth/register-patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

// =========================================================
// Appointments
// =========================================================

/// POST /appointments/book（病人自助预约）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub appointment_type: String,
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// POST /appointments/（工作人员代建）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub appointment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// PUT /appointments/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_remarks: Option<String>,
}

/// PUT /appointments/{id}/consult
/// `doctor_remarks` 始终发送，未填写时为空字符串。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultRequest {
    pub doctor_remarks: String,
}

/// consult 的响应同时携带更新后的预约。
#[derive(Debug, Clone, Deserialize)]
pub struct ConsultResponse {
    pub message: String,
    #[serde(default)]
    pub appointment: Option<Appointment>,
}

// =========================================================
// Patients
// =========================================================

/// PUT /patients/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

// =========================================================
// Triage / Alerts
// =========================================================

/// POST /triage/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTriageRequest {
    pub patient_id: String,
    pub nurse_id: String,
    pub blood_pressure: String,
    pub heart_rate: u32,
    pub temperature: f32,
    pub oxygen_saturation: u32,
    pub respiratory_rate: u32,
    pub symptoms: String,
    pub priority: TriagePriority,
}

/// PUT /triage/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTriageStatusRequest {
    pub status: TriageStatus,
}

/// POST /alerts/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlertRequest {
    pub alert_type: AlertKind,
    pub title: String,
    pub message: String,
    pub user_id: String,
}

// =========================================================
// Generic
// =========================================================

/// 后端对删除/标记类操作返回 `{"message": ...}`，多余字段忽略。
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
