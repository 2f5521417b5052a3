use crate::access::{EndpointPolicy, extract_token};
use http::HeaderMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The path is not in the endpoint table.
    NoPolicy,
    InvalidToken,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NoPolicy => f.write_str("no policy registered"),
            RejectReason::InvalidToken => f.write_str("invalid or missing token"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Reject(RejectReason),
}

/// Per-endpoint privacy enforcement.
///
/// Built once from validated configuration; holds no mutable state.
#[derive(Debug, Clone)]
pub struct AccessGate {
    private_mode: bool,
    policy: EndpointPolicy,
    token: String,
}

impl AccessGate {
    pub fn new(private_mode: bool, policy: EndpointPolicy, token: impl Into<String>) -> Self {
        Self {
            private_mode,
            policy,
            token: token.into(),
        }
    }

    pub fn private_mode(&self) -> bool {
        self.private_mode
    }

    pub fn authorize(&self, path: &str, headers: &HeaderMap, query: Option<&str>) -> AccessDecision {
        if !self.private_mode {
            return AccessDecision::Allow;
        }

        // Fail closed: unknown paths are rejected whatever the token.
        let Some(open) = self.policy.is_open(path) else {
            return AccessDecision::Reject(RejectReason::NoPolicy);
        };

        if open {
            return AccessDecision::Allow;
        }

        match extract_token(headers, query) {
            Some(presented) if tokens_match(&presented, &self.token) => AccessDecision::Allow,
            _ => AccessDecision::Reject(RejectReason::InvalidToken),
        }
    }
}

/// Exact comparison that does not short-circuit on the first differing byte.
/// An empty configured token never matches.
fn tokens_match(presented: &str, expected: &str) -> bool {
    if expected.is_empty() || presented.len() != expected.len() {
        return false;
    }
    presented
        .bytes()
        .zip(expected.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
