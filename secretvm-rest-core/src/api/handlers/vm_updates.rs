use crate::api::{ApiError, ApiResponse, AppState};
use crate::exec::commands::image_filters;
use http::StatusCode;
use serde_json::json;

/// `GET /vm_updates`: image filters from the KMS contract, passed through.
pub async fn vm_updates(state: &AppState) -> Result<ApiResponse, ApiError> {
    let Some(service_id) = &state.config.files.service_id else {
        return Ok(ApiResponse::json(
            StatusCode::OK,
            &json!({ "message": "VM is not upgradeable" }),
        ));
    };

    let out = image_filters(state.runner.as_ref(), service_id)
        .await
        .map_err(|e| ApiError::upstream("failed to query contract", e.to_string()))?;

    if let Err(e) = serde_json::from_str::<serde::de::IgnoredAny>(&out) {
        return Err(ApiError::upstream("invalid JSON from kms-query", e.to_string()));
    }

    Ok(ApiResponse::raw_json(StatusCode::OK, out))
}
