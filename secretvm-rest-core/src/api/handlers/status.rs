use crate::api::{ApiResponse, AppState};
use chrono::{SecondsFormat, Utc};
use http::StatusCode;
use serde_json::json;

/// `GET /status`. Always 200; probe failures report `server_error`.
pub async fn status(state: &AppState) -> ApiResponse {
    let status = state.status.current().await;

    ApiResponse::json(
        StatusCode::OK,
        &json!({
            "status": status,
            "time": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            "env": state.config.server.env_label(),
        }),
    )
}
