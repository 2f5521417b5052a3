use crate::api::{ApiError, ApiRequest, ApiResponse, AppState};
use crate::conf::types::LogsConfig;
use crate::logs::{LogSelector, render_lines};
use http::StatusCode;

/// Query parameters of `GET /logs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogParams {
    pub selector: LogSelector,
    pub lines: usize,
}

impl LogParams {
    /// `lines` falls back to the configured default when missing, not a
    /// number or not positive, and is clamped to the configured maximum.
    /// `service` and `index` are mutually exclusive.
    pub fn parse(query: Option<&str>, config: &LogsConfig) -> Result<Self, ApiError> {
        let mut lines = None;
        let mut service = String::new();
        let mut index = String::new();

        for (key, value) in url::form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            match key.as_ref() {
                "lines" => lines = Some(value.into_owned()),
                "service" => service = value.trim().to_owned(),
                "index" => index = value.trim().to_owned(),
                _ => {}
            }
        }

        let lines = lines
            .and_then(|l| l.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .map(|n| n.min(config.max_lines))
            .unwrap_or(config.default_lines);

        let selector = match (service.is_empty(), index.is_empty()) {
            (_, true) => LogSelector::from_service(&service),
            (true, false) => {
                let i = index.parse::<usize>().map_err(|_| ApiError::Validation {
                    error: "Invalid index",
                    details: format!("index must be a non-negative integer, got '{index}'"),
                })?;
                LogSelector::ByIndex(i)
            }
            (false, false) => {
                return Err(ApiError::Validation {
                    error: "Conflicting selectors",
                    details: "use either service or index, not both".to_owned(),
                });
            }
        };

        Ok(Self { selector, lines })
    }
}

/// `GET /logs`
pub async fn logs(state: &AppState, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
    let params = LogParams::parse(req.query.as_deref(), &state.config.logs)?;

    let lines = state
        .logs
        .get_logs(&params.selector, params.lines, state.config.server.secure_mode)
        .await?;

    tracing::debug!(
        selector = %params.selector,
        limit = params.lines,
        returned = lines.len(),
        "logs served"
    );

    Ok(ApiResponse::text(
        StatusCode::OK,
        render_lines(&lines, &state.hostname),
    ))
}

/// `GET /services`
pub async fn services(state: &AppState) -> ApiResponse {
    let sources = state
        .logs
        .list_sources(state.config.server.secure_mode)
        .await;
    ApiResponse::json(StatusCode::OK, &sources)
}
