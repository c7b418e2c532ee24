use crate::headers::Headers;

/// Headers to attach before forwarding a non-preflight request to
/// application logic. A disallowed origin yields `allowed = false` and no
/// `Access-Control-Allow-*` headers; the request still proceeds because
/// enforcement happens in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub allowed: bool,
    pub headers: Headers,
}

/// Terminal answer to a preflight: respond immediately with `status` and an
/// empty body, never forwarding to application logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub allowed: bool,
    pub headers: Headers,
    pub status: u16,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    /// Same-origin or non-browser request, or the engine is disabled;
    /// forward untouched with no CORS headers.
    NotApplicable,
}
