use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Header carrying a token for development tooling that cannot set
/// `Authorization`.
pub const DEV_TOKEN_HEADER: &str = "x-dev-token";

/// Query parameter accepted as a last resort (e.g. links opened in a browser).
pub const TOKEN_QUERY_PARAM: &str = "token";

const BEARER_PREFIX: &str = "bearer ";

/// Extract a caller credential.
///
/// Sources in priority order: `Authorization: Bearer <token>` (prefix matched
/// case-insensitively), the dev-token header, the `token` query parameter.
/// The first non-empty source wins.
pub fn extract_token(headers: &HeaderMap, query: Option<&str>) -> Option<String> {
    bearer_token(headers)
        .or_else(|| dev_header_token(headers))
        .or_else(|| query.and_then(query_token))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let prefix = value.get(..BEARER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }
    non_empty(&value[BEARER_PREFIX.len()..])
}

fn dev_header_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(DEV_TOKEN_HEADER)?.to_str().ok()?;
    non_empty(value)
}

fn query_token(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == TOKEN_QUERY_PARAM)
        .find_map(|(_, value)| non_empty(&value))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}
