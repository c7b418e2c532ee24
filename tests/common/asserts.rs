#![allow(dead_code)]

use super::headers::{header_value, vary_values};
use cors_gate::{CorsDecision, Headers, PreflightResult, SimpleResult};
use std::collections::HashSet;

pub fn assert_simple(decision: CorsDecision) -> SimpleResult {
    match decision {
        CorsDecision::Simple(result) => result,
        other => panic!("expected simple decision, got {other:?}"),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> PreflightResult {
    match decision {
        CorsDecision::Preflight(result) => result,
        other => panic!("expected preflight decision, got {other:?}"),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::NotApplicable),
        "expected NotApplicable decision, got {decision:?}"
    );
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_no_header(headers: &Headers, name: &str) {
    assert_eq!(
        header_value(headers, name),
        None,
        "expected header {name} to be absent"
    );
}

pub fn assert_vary_eq<const N: usize>(headers: &Headers, expected: [&str; N]) {
    let expected: HashSet<String> = expected.iter().map(|name| name.to_string()).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(
        vary_values(headers).is_empty(),
        "expected no Vary members, got {:?}",
        vary_values(headers)
    );
}
