use crate::access::RejectReason;
use crate::api::{ApiError, ApiResponse, COMMON_HEADERS};
use crate::logs::LogQueryError;
use http::StatusCode;
use pretty_assertions::assert_eq;

#[test]
fn every_response_carries_common_headers_and_request_id() {
    // Arrange
    let resp = ApiResponse::text(StatusCode::OK, "hello");

    // Act
    let header = resp.response_header("req-1").unwrap();

    // Assert
    for (name, value) in COMMON_HEADERS {
        assert_eq!(header.headers.get(*name).unwrap(), *value, "{name}");
    }
    assert_eq!(header.headers.get("x-request-id").unwrap(), "req-1");
    assert_eq!(
        header.headers.get("content-type").unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(header.headers.get("content-length").unwrap(), "5");
}

#[test]
fn empty_response_has_no_content_type() {
    let header = ApiResponse::empty(StatusCode::OK)
        .response_header("req-2")
        .unwrap();

    assert!(header.headers.get("content-type").is_none());
    assert_eq!(header.headers.get("content-length").unwrap(), "0");
}

#[test]
fn errors_render_error_and_details() {
    let resp = ApiResponse::error(&ApiError::MethodNotAllowed);

    let body: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();

    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        serde_json::json!({
            "error": "Method not allowed",
            "details": "Only GET requests are supported"
        })
    );
    assert!(resp.headers.contains(&("allow", "GET, OPTIONS".to_owned())));
}

#[test]
fn unauthorized_carries_the_reject_reason() {
    let err = ApiError::Unauthorized(RejectReason::NoPolicy);

    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(err.body().details, "no policy registered");
}

#[test]
fn query_errors_map_to_http_statuses() {
    let cases = [
        (
            LogQueryError::NotFound { name: "x".into() },
            StatusCode::NOT_FOUND,
        ),
        (
            LogQueryError::OutOfRange { index: 5, count: 3 },
            StatusCode::NOT_FOUND,
        ),
        (LogQueryError::ContainersDisabled, StatusCode::NOT_FOUND),
        (
            LogQueryError::Upstream(crate::exec::ExecError::TimedOut {
                program: "docker".into(),
                timeout: std::time::Duration::from_secs(1),
            }),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(ApiError::from(err).status(), expected);
    }
}
