use std::time::Instant;
use uuid::Uuid;

/// Per-request bookkeeping carried from `request_filter` to `logging`.
#[derive(Debug)]
pub struct RequestCtx {
    pub request_id: String,
    pub started: Instant,
    /// Set once a response has been written.
    pub status: Option<u16>,
}

impl RequestCtx {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            started: Instant::now(),
            status: None,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for RequestCtx {
    fn default() -> Self {
        Self::new()
    }
}
