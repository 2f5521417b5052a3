use crate::api::ApiError;
use bytes::Bytes;
use http::{StatusCode, header};
use pingora_http::ResponseHeader;
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Headers attached to every response, including errors and preflights.
pub const COMMON_HEADERS: &[(&str, &str)] = &[
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    (
        "strict-transport-security",
        "max-age=31536000; includeSubDomains",
    ),
    ("content-security-policy", "default-src 'self'"),
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, OPTIONS"),
    (
        "access-control-allow-headers",
        "Content-Type, Authorization",
    ),
];

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Written when a JSON payload itself cannot be serialized.
const FALLBACK_ERROR_BODY: &[u8] =
    br#"{"error":"Internal server error","details":"Failed to generate response"}"#;

/// A fully buffered response, independent of the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::raw_json(status, body),
            Err(e) => {
                tracing::error!(error = %e, "json serialization failed");
                Self::raw_json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Bytes::from_static(FALLBACK_ERROR_BODY),
                )
            }
        }
    }

    /// Body that is already JSON.
    pub fn raw_json(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: Some(CONTENT_TYPE_JSON),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn text(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: Some(CONTENT_TYPE_TEXT),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    pub fn error(err: &ApiError) -> Self {
        let resp = Self::json(err.status(), &err.body());
        match err {
            ApiError::MethodNotAllowed => resp.with_header("allow", "GET, OPTIONS"),
            ApiError::Unauthorized(_) => resp.with_header("www-authenticate", "Bearer"),
            _ => resp,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Build the pingora response header: common headers, then the
    /// response's own, then framing.
    pub fn response_header(&self, request_id: &str) -> pingora::Result<ResponseHeader> {
        let mut resp = ResponseHeader::build(self.status, Some(COMMON_HEADERS.len() + 4))?;

        for (name, value) in COMMON_HEADERS {
            resp.insert_header(*name, *value)?;
        }
        for (name, value) in &self.headers {
            resp.insert_header(*name, value.as_str())?;
        }
        if let Some(content_type) = self.content_type {
            resp.insert_header(header::CONTENT_TYPE, content_type)?;
        }
        resp.insert_header(header::CONTENT_LENGTH, self.body.len().to_string())?;
        resp.insert_header(REQUEST_ID_HEADER, request_id)?;

        Ok(resp)
    }
}
