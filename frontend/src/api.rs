//! API 访问层
//!
//! 所有出站请求的单一出口：组合默认请求头（Content-Type 与
//! 持久化令牌对应的 Bearer 凭据）、JSON 编解码，并把所有失败
//! 形态归一化为 [`ApiResult`]。按资源分组的门面模块负责路径与
//! 载荷，页面永远不手写端点。

use crate::auth;
use crate::web::{HttpClient, HttpMethod};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use vitalsfirst_shared::protocol::*;
use vitalsfirst_shared::{
    Alert, Appointment, Patient, Role, TriagePriority, TriageRecord, TriageStatus, User,
};

/// 后端固定源地址，所有相对路径都拼接在其后
pub const API_BASE_URL: &str = "http://localhost:8000";

/// 传输层失败（未取得任何响应）的约定状态码
pub const TRANSPORT_STATUS: u16 = 0;

// =========================================================
// 统一结果
// =========================================================

/// 任何后端调用的统一结果：要么成功携带数据，要么失败携带
/// 消息；`status` 始终存在，0 表示传输层失败而非应用错误。
/// 门面与客户端对预期失败从不 panic，调用方检查结果即可。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success { data: T, status: u16 },
    Failure { error: String, status: u16 },
}

impl<T> ApiResult<T> {
    pub fn transport_failure(error: impl Into<String>) -> Self {
        ApiResult::Failure {
            error: error.into(),
            status: TRANSPORT_STATUS,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiResult::Success { status, .. } | ApiResult::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResult::Success { data, .. } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResult::Failure { error, .. } => Some(error),
            ApiResult::Success { .. } => None,
        }
    }
}

// =========================================================
// 取消令牌
// =========================================================

/// 页面级加载的取消令牌
///
/// 组件在 `on_cleanup` 中调用 [`CancelToken::cancel`]，异步加载
/// 在写回本地状态前检查令牌，避免卸载后的写入。
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// =========================================================
// HTTP 客户端（choke point）
// =========================================================

pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 默认请求头；存在持久化令牌时附加 Bearer 凭据。
    /// 未认证时不带凭据照常发出，由后端以鉴权错误拒绝。
    fn default_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = auth::stored_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    /// 发出请求并归一化结果。永不 panic、永不抛出：任何失败
    /// 形态都折叠进 `ApiResult::Failure`。
    ///
    /// 调用方传入的请求头后写入，同名时覆盖默认值。
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<String>,
        extra_headers: &[(&str, &str)],
    ) -> ApiResult<T> {
        let mut builder = HttpClient::request(&self.url(endpoint), method);

        for (key, value) in self.default_headers() {
            builder = builder.header(&key, &value);
        }
        for (key, value) in extra_headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return ApiResult::transport_failure(e.to_string()),
        };

        let status = response.status();
        let ok = response.ok();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return ApiResult::transport_failure(e.to_string()),
        };

        decode_response(status, ok, &text)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, HttpMethod::Get, None, &[]).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> ApiResult<T> {
        match serde_json::to_string(body) {
            Ok(body) => {
                self.request(endpoint, HttpMethod::Post, Some(body), &[])
                    .await
            }
            Err(e) => ApiResult::transport_failure(e.to_string()),
        }
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> ApiResult<T> {
        match serde_json::to_string(body) {
            Ok(body) => {
                self.request(endpoint, HttpMethod::Put, Some(body), &[])
                    .await
            }
            Err(e) => ApiResult::transport_failure(e.to_string()),
        }
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, HttpMethod::Delete, None, &[]).await
    }
}

/// 把 (状态码, 成功位, 响应体文本) 归一化为 `ApiResult`
///
/// - 2xx 且响应体可解析为 `T` → 成功；
/// - 非 2xx 且响应体为 JSON → 取其 `detail` 字段作为消息，
///   缺失时退化为 "Request failed"；
/// - 响应体不是合法 JSON（或形状不符）→ 按传输路径报告（状态 0）。
fn decode_response<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> ApiResult<T> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return ApiResult::transport_failure(e.to_string()),
    };

    if !ok {
        let error = match value.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => "Request failed".to_string(),
        };
        return ApiResult::Failure { error, status };
    }

    match serde_json::from_value(value) {
        Ok(data) => ApiResult::Success { data, status },
        Err(e) => ApiResult::transport_failure(e.to_string()),
    }
}

fn client() -> ApiClient {
    ApiClient::new(API_BASE_URL)
}

// =========================================================
// 查询串构造（缺席的参数整体省略，不发空键）
// =========================================================

fn paged_query(skip: u32, limit: u32) -> String {
    format!("?skip={}&limit={}", skip, limit)
}

fn triage_query(priority: Option<TriagePriority>, status: Option<TriageStatus>) -> String {
    let mut params = Vec::new();
    if let Some(priority) = priority {
        params.push(format!("priority={}", priority.as_str()));
    }
    if let Some(status) = status {
        params.push(format!("status={}", status.as_str()));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

fn alerts_query(unread_only: bool) -> String {
    if unread_only {
        "?unread_only=true".to_string()
    } else {
        String::new()
    }
}

// =========================================================
// 门面 (Facades)
// =========================================================

pub mod auth_api {
    use super::*;

    pub async fn login(username: &str, password: &str, role: Role) -> ApiResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            role,
        };
        client().post("/auth/login", &request).await
    }

    pub async fn register(data: &RegisterStaffRequest) -> ApiResult<User> {
        client().post("/auth/register", data).await
    }

    pub async fn register_patient(data: &RegisterPatientRequest) -> ApiResult<User> {
        client().post("/auth/register-patient", data).await
    }

    pub async fn get_current_user() -> ApiResult<User> {
        client().get("/auth/me").await
    }

    pub async fn get_doctors() -> ApiResult<Vec<User>> {
        client().get("/doctors/").await
    }

    pub async fn book_appointment(data: &BookAppointmentRequest) -> ApiResult<Appointment> {
        client().post("/appointments/book", data).await
    }
}

pub mod users_api {
    use super::*;

    pub async fn list(skip: u32, limit: u32) -> ApiResult<Vec<User>> {
        client()
            .get(&format!("/users/{}", paged_query(skip, limit)))
            .await
    }

    pub async fn get(user_id: &str) -> ApiResult<User> {
        client().get(&format!("/users/{}", user_id)).await
    }
}

pub mod patients_api {
    use super::*;

    pub async fn list(skip: u32, limit: u32) -> ApiResult<Vec<Patient>> {
        client()
            .get(&format!("/patients/{}", paged_query(skip, limit)))
            .await
    }

    pub async fn get(patient_id: &str) -> ApiResult<Patient> {
        client().get(&format!("/patients/{}", patient_id)).await
    }

    pub async fn update(patient_id: &str, data: &PatientUpdate) -> ApiResult<Patient> {
        client()
            .put(&format!("/patients/{}", patient_id), data)
            .await
    }
}

pub mod appointments_api {
    use super::*;

    pub async fn list(skip: u32, limit: u32) -> ApiResult<Vec<Appointment>> {
        client()
            .get(&format!("/appointments/{}", paged_query(skip, limit)))
            .await
    }

    pub async fn create(data: &CreateAppointmentRequest) -> ApiResult<Appointment> {
        client().post("/appointments/", data).await
    }

    pub async fn update(
        appointment_id: &str,
        data: &UpdateAppointmentRequest,
    ) -> ApiResult<Appointment> {
        client()
            .put(&format!("/appointments/{}", appointment_id), data)
            .await
    }

    pub async fn delete(appointment_id: &str) -> ApiResult<MessageResponse> {
        client()
            .delete(&format!("/appointments/{}", appointment_id))
            .await
    }

    /// `remarks` 允许为空串，但始终随请求发送。
    pub async fn mark_consulted(appointment_id: &str, remarks: &str) -> ApiResult<ConsultResponse> {
        let request = ConsultRequest {
            doctor_remarks: remarks.to_string(),
        };
        client()
            .put(&format!("/appointments/{}/consult", appointment_id), &request)
            .await
    }
}

pub mod triage_api {
    use super::*;

    pub async fn list(
        priority: Option<TriagePriority>,
        status: Option<TriageStatus>,
    ) -> ApiResult<Vec<TriageRecord>> {
        client()
            .get(&format!("/triage/{}", triage_query(priority, status)))
            .await
    }

    pub async fn create(data: &CreateTriageRequest) -> ApiResult<TriageRecord> {
        client().post("/triage/", data).await
    }

    pub async fn update_status(triage_id: &str, status: TriageStatus) -> ApiResult<MessageResponse> {
        let request = UpdateTriageStatusRequest { status };
        client()
            .put(&format!("/triage/{}", triage_id), &request)
            .await
    }
}

pub mod alerts_api {
    use super::*;

    pub async fn list(unread_only: bool) -> ApiResult<Vec<Alert>> {
        client()
            .get(&format!("/alerts/{}", alerts_query(unread_only)))
            .await
    }

    pub async fn create(data: &CreateAlertRequest) -> ApiResult<Alert> {
        client().post("/alerts/", data).await
    }

    pub async fn mark_read(alert_id: &str) -> ApiResult<MessageResponse> {
        client()
            .put(&format!("/alerts/{}/read", alert_id), &serde_json::json!({}))
            .await
    }
}

pub mod dashboard_api {
    use super::*;

    /// `/dashboard/stats` 的形状随角色而变，调用方指定期望的
    /// 统计结构。
    pub async fn stats<T: DeserializeOwned>() -> ApiResult<T> {
        client().get("/dashboard/stats").await
    }
}

#[cfg(test)]
mod tests;
