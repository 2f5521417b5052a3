use crate::api::{ApiError, ApiResponse, AppState};
use http::StatusCode;
use std::io::ErrorKind;

/// An attestation artifact in the report directory.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub file_name: &'static str,
    pub kind: &'static str,
}

pub const CPU_REPORT: Report = Report {
    file_name: "tdx_attestation.txt",
    kind: "CPU",
};

pub const GPU_REPORT: Report = Report {
    file_name: "gpu_attestation.txt",
    kind: "GPU",
};

pub const SELF_REPORT: Report = Report {
    file_name: "self_report.txt",
    kind: "Self",
};

/// `GET /cpu`, `/gpu`, `/self`
pub async fn attestation(state: &AppState, report: Report) -> Result<ApiResponse, ApiError> {
    let path = state.config.files.report_dir.join(report.file_name);

    match tokio::fs::read(&path).await {
        Ok(content) => Ok(ApiResponse::text(StatusCode::OK, content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), kind = report.kind, "attestation file not found");
            Err(ApiError::not_found(
                format!("{} attestation not available", report.kind),
                format!(
                    "The {} attestation data has not been generated or is not ready yet",
                    report.kind
                ),
            ))
        }
        Err(e) => Err(ApiError::internal(
            format!("Failed to retrieve {} attestation data", report.kind),
            e.to_string(),
        )),
    }
}

/// `GET /docker-compose`
pub async fn docker_compose(state: &AppState) -> Result<ApiResponse, ApiError> {
    let Some(path) = &state.config.files.docker_compose_path else {
        return Err(ApiError::internal(
            "Configuration error",
            "SECRETVM_DOCKER_COMPOSE_PATH is not set",
        ));
    };

    let content = tokio::fs::read(path).await.map_err(|e| {
        ApiError::not_found(
            "File not found",
            format!("Could not read file {}: {e}", path.display()),
        )
    })?;

    Ok(ApiResponse::text(StatusCode::OK, content))
}
