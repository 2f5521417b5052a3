mod ctx;
mod endpoint;
mod error;
mod gateway;
mod handlers;
mod request;
mod response;
mod router;
mod state;

#[cfg(test)]
mod tests;

pub use ctx::RequestCtx;
pub use endpoint::Endpoint;
pub use error::{ApiError, ErrorBody};
pub use gateway::DiagnosticGateway;
pub use handlers::LogParams;
pub use request::ApiRequest;
pub use response::{ApiResponse, COMMON_HEADERS};
pub use router::dispatch;
pub use state::AppState;
