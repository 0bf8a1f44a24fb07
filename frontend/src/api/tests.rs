use super::*;
use serde_json::Value;

// =========================================================
// Error normalization
// =========================================================

#[test]
fn error_response_uses_detail_field() {
    let result: ApiResult<Value> = decode_response(404, false, r#"{"detail":"not found"}"#);
    assert_eq!(
        result,
        ApiResult::Failure {
            error: "not found".to_string(),
            status: 404,
        }
    );
}

#[test]
fn error_response_without_detail_falls_back() {
    let result: ApiResult<Value> = decode_response(500, false, r#"{"oops":true}"#);
    assert_eq!(
        result,
        ApiResult::Failure {
            error: "Request failed".to_string(),
            status: 500,
        }
    );
}

#[test]
fn non_string_detail_is_stringified() {
    let result: ApiResult<Value> = decode_response(422, false, r#"{"detail":[{"loc":["body"]}]}"#);
    let ApiResult::Failure { error, status } = result else {
        panic!("expected failure");
    };
    assert_eq!(status, 422);
    assert!(error.contains("loc"));
}

#[test]
fn invalid_json_reports_transport_status() {
    let result: ApiResult<Value> = decode_response(200, true, "<html>gateway error</html>");
    assert_eq!(result.status(), TRANSPORT_STATUS);
    assert!(!result.is_success());
}

#[test]
fn success_decodes_payload_with_status() {
    let result: ApiResult<Value> = decode_response(201, true, r#"{"id":"a1"}"#);
    let ApiResult::Success { data, status } = result else {
        panic!("expected success");
    };
    assert_eq!(status, 201);
    assert_eq!(data["id"], "a1");
}

#[test]
fn success_with_mismatched_shape_is_a_failure() {
    // 2xx 但无法解析成期望类型时不得伪装成成功
    let result: ApiResult<User> = decode_response(200, true, r#"{"unexpected":1}"#);
    assert!(!result.is_success());
    assert_eq!(result.status(), TRANSPORT_STATUS);
}

// =========================================================
// Query building
// =========================================================

#[test]
fn triage_query_omits_absent_parameters() {
    assert_eq!(triage_query(None, None), "");
    assert_eq!(
        triage_query(Some(TriagePriority::High), None),
        "?priority=high"
    );
    assert_eq!(
        triage_query(None, Some(TriageStatus::InProgress)),
        "?status=in-progress"
    );
    assert_eq!(
        triage_query(Some(TriagePriority::Critical), Some(TriageStatus::Pending)),
        "?priority=critical&status=pending"
    );
}

#[test]
fn alerts_query_only_appends_true_flag() {
    assert_eq!(alerts_query(true), "?unread_only=true");
    assert_eq!(alerts_query(false), "");
}

#[test]
fn paged_query_always_carries_both_parameters() {
    assert_eq!(paged_query(0, 100), "?skip=0&limit=100");
    assert_eq!(paged_query(20, 10), "?skip=20&limit=10");
}

// =========================================================
// Client plumbing
// =========================================================

#[test]
fn base_url_join_handles_slashes() {
    let client = ApiClient::new("http://localhost:8000/");
    assert_eq!(client.url("/auth/me"), "http://localhost:8000/auth/me");
    assert_eq!(client.url("auth/me"), "http://localhost:8000/auth/me");
}

#[test]
fn default_headers_without_session_have_no_credential() {
    // 原生测试环境没有持久化存储，等价于未登录状态
    let client = ApiClient::new(API_BASE_URL);
    let headers = client.default_headers();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].0, "Content-Type");
    assert_eq!(headers[0].1, "application/json");
}

#[test]
fn cancel_token_flips_once() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());

    let clone = token.clone();
    clone.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn api_result_accessors() {
    let success: ApiResult<u32> = ApiResult::Success {
        data: 7,
        status: 200,
    };
    assert!(success.is_success());
    assert_eq!(success.clone().into_data(), Some(7));
    assert_eq!(success.error(), None);

    let failure: ApiResult<u32> = ApiResult::transport_failure("connection refused");
    assert_eq!(failure.status(), 0);
    assert_eq!(failure.error(), Some("connection refused"));
    assert_eq!(failure.into_data(), None);
}
