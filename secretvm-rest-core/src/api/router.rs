use crate::access::AccessDecision;
use crate::api::handlers;
use crate::api::{ApiError, ApiRequest, ApiResponse, AppState, Endpoint};
use http::{Method, StatusCode};

/// Answer one request.
///
/// Order: CORS preflight, access gate, routing, method check, handler.
pub async fn dispatch(state: &AppState, req: &ApiRequest) -> ApiResponse {
    if req.method == Method::OPTIONS {
        return ApiResponse::empty(StatusCode::OK);
    }

    if let AccessDecision::Reject(reason) =
        state
            .gate
            .authorize(&req.path, &req.headers, req.query.as_deref())
    {
        tracing::info!(path = %req.path, %reason, "request rejected by access gate");
        return ApiResponse::error(&ApiError::Unauthorized(reason));
    }

    match route(state, req).await {
        Ok(resp) => resp,
        Err(e) => {
            if e.status().is_server_error() {
                tracing::error!(path = %req.path, error = %e, "request failed");
            } else {
                tracing::debug!(path = %req.path, error = %e, "request rejected");
            }
            ApiResponse::error(&e)
        }
    }
}

async fn route(state: &AppState, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
    let endpoint = req.path.parse::<Endpoint>().map_err(|_| {
        ApiError::not_found("Not found", format!("No endpoint at {}", req.path))
    })?;

    if req.method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    match endpoint {
        Endpoint::Status => Ok(handlers::status(state).await),
        Endpoint::Logs => handlers::logs(state, req).await,
        Endpoint::Services => Ok(handlers::services(state).await),
        Endpoint::CpuAttestation => handlers::attestation(state, handlers::CPU_REPORT).await,
        Endpoint::GpuAttestation => handlers::attestation(state, handlers::GPU_REPORT).await,
        Endpoint::SelfReport => handlers::attestation(state, handlers::SELF_REPORT).await,
        Endpoint::DockerCompose => handlers::docker_compose(state).await,
        Endpoint::VmUpdates => handlers::vm_updates(state).await,
    }
}
