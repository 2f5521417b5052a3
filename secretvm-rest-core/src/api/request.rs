use http::{HeaderMap, Method};
use pingora_http::RequestHeader;

/// The parts of a request the router needs, detached from the session.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn from_header(req: &RequestHeader) -> Self {
        Self {
            method: req.method.clone(),
            path: req.uri.path().to_owned(),
            query: req.uri.query().map(str::to_owned),
            headers: req.headers.clone(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = value.parse() {
            self.headers.insert(name, value);
        }
        self
    }
}
