use serde::{Deserialize, Serialize};

pub mod protocol;

#[cfg(test)]
mod tests;

// =========================================================
// 角色 (Roles)
// =========================================================

/// 系统的封闭角色集合，每个身份恰好持有一个角色。
/// 序列化值与后端一致（小写）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Nurse,
    Doctor,
    Administrator,
    Patient,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Nurse, Role::Doctor, Role::Administrator, Role::Patient];

    /// 线上序列化值
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Nurse => "nurse",
            Role::Doctor => "doctor",
            Role::Administrator => "administrator",
            Role::Patient => "patient",
        }
    }

    /// UI 显示名称
    pub fn title(&self) -> &'static str {
        match self {
            Role::Nurse => "Nurse",
            Role::Doctor => "Doctor",
            Role::Administrator => "Administrator",
            Role::Patient => "Patient",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "nurse" => Some(Role::Nurse),
            "doctor" => Some(Role::Doctor),
            "administrator" => Some(Role::Administrator),
            "patient" => Some(Role::Patient),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 已认证身份。登录响应与 `/auth/me` 均返回该结构。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// 持久化的会话快照，整体写入/读取单个存储键。
/// `is_authenticated` 为真时 `user` 与 `token` 必须同时存在，
/// 恢复端负责拒绝不一致的快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub token: Option<String>,
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
}

/// 病人档案。`user` 仅在详情视图中由后端联表填充。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    pub registration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub appointment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    // 后端返回前补齐的展示字段
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_remarks: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriagePriority {
    Critical,
    High,
    Medium,
    Low,
}

impl TriagePriority {
    pub const ALL: [TriagePriority; 4] = [
        TriagePriority::Critical,
        TriagePriority::High,
        TriagePriority::Medium,
        TriagePriority::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TriagePriority::Critical => "critical",
            TriagePriority::High => "high",
            TriagePriority::Medium => "medium",
            TriagePriority::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Option<TriagePriority> {
        match s {
            "critical" => Some(TriagePriority::Critical),
            "high" => Some(TriagePriority::High),
            "medium" => Some(TriagePriority::Medium),
            "low" => Some(TriagePriority::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriageStatus {
    Pending,
    InProgress,
    Completed,
}

impl TriageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageStatus::Pending => "pending",
            TriageStatus::InProgress => "in-progress",
            TriageStatus::Completed => "completed",
        }
    }

    /// 处理流程中的下一个状态；已完成的记录保持不变。
    pub fn next(&self) -> TriageStatus {
        match self {
            TriageStatus::Pending => TriageStatus::InProgress,
            TriageStatus::InProgress | TriageStatus::Completed => TriageStatus::Completed,
        }
    }
}

/// 分诊记录：生命体征 + 症状 + 优先级。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRecord {
    pub id: String,
    pub patient_id: String,
    pub nurse_id: String,
    pub blood_pressure: String,
    pub heart_rate: u32,
    pub temperature: f32,
    pub oxygen_saturation: u32,
    pub respiratory_rate: u32,
    pub symptoms: String,
    pub priority: TriagePriority,
    pub status: TriageStatus,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nurse_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Emergency,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub alert_type: AlertKind,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub is_read: bool,
    pub user_id: String,
}

// =========================================================
// 仪表盘统计 (Dashboard Stats)
// =========================================================
// `/dashboard/stats` 的响应形状随请求者角色而变，
// 各仪表盘按自身角色解码对应的结构。

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NurseStats {
    pub active_patients: u32,
    pub critical_cases: u32,
    pub triage_queue: u32,
    pub appointments_today: u32,
    pub shift_hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorStats {
    pub appointments_today: u32,
    pub pending_reviews: u32,
    pub critical_alerts: u32,
    pub avg_wait_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientStats {
    pub upcoming_appointments: u32,
    pub medical_records: u32,
    pub triage_priority: String,
    pub last_visit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_patients: u32,
    pub active_staff: u32,
    pub system_alerts: u32,
    pub monthly_appointments: u32,
}
