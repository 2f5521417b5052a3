use crate::api::{ApiError, LogParams};
use crate::conf::types::LogsConfig;
use crate::logs::LogSelector;
use pretty_assertions::assert_eq;

fn config() -> LogsConfig {
    LogsConfig {
        default_lines: 1000,
        max_lines: 5000,
        journal_lines: 1000,
        journal_units: Vec::new(),
    }
}

fn parse(query: &str) -> Result<LogParams, ApiError> {
    LogParams::parse(Some(query), &config())
}

#[test]
fn no_query_means_everything_with_default_lines() {
    let params = LogParams::parse(None, &config()).unwrap();

    assert_eq!(
        params,
        LogParams {
            selector: LogSelector::Unspecified,
            lines: 1000
        }
    );
}

#[test]
fn invalid_line_counts_fall_back_to_default() {
    for query in ["lines=abc", "lines=0", "lines=-20", "lines="] {
        assert_eq!(parse(query).unwrap().lines, 1000, "{query}");
    }
}

#[test]
fn line_count_is_clamped_to_max() {
    assert_eq!(parse("lines=250").unwrap().lines, 250);
    assert_eq!(parse("lines=999999").unwrap().lines, 5000);
}

#[test]
fn service_selects_by_name() {
    assert_eq!(
        parse("service=secretvm").unwrap().selector,
        LogSelector::ByName("secretvm".into())
    );
    assert_eq!(
        parse("service=my%20app&lines=5").unwrap().selector,
        LogSelector::ByName("my app".into())
    );
    assert_eq!(parse("service=").unwrap().selector, LogSelector::Unspecified);
}

#[test]
fn index_selects_by_position() {
    assert_eq!(parse("index=2").unwrap().selector, LogSelector::ByIndex(2));
}

#[test]
fn non_numeric_index_is_rejected() {
    let err = parse("index=two").unwrap_err();

    assert_eq!(err.status(), http::StatusCode::BAD_REQUEST);
    assert_eq!(err.body().error, "Invalid index");
}

#[test]
fn service_and_index_conflict() {
    let err = parse("service=web&index=0").unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation {
            error: "Conflicting selectors",
            ..
        }
    ));
}
