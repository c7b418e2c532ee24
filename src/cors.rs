use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

/// Preflights are answered with 200 and an empty body; a disallowed origin
/// gets the same status, just without the allow headers, because CORS
/// enforcement is client-side.
const PREFLIGHT_SUCCESS_STATUS: u16 = 200;

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Construct once at startup and share across request handlers; evaluation
/// is a pure read of the frozen options.
///
/// ```
/// use cors_gate::{Cors, CorsDecision, CorsOptions, RequestContext};
///
/// let cors = Cors::new(CorsOptions::default())?;
/// let decision = cors.evaluate(&RequestContext {
///     method: "POST",
///     origin: Some("http://localhost:9011"),
///     access_control_request_method: None,
///     access_control_request_headers: None,
/// });
/// assert!(matches!(decision, CorsDecision::Simple(result) if result.allowed));
/// # Ok::<(), cors_gate::ValidationError>(())
/// ```
#[derive(Debug)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Decides how the hosting server should treat `request`. Infallible at
    /// request time: a non-matching origin is a silent non-match, never an
    /// error or a 403.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.options.enabled {
            return CorsDecision::NotApplicable;
        }

        let Some(origin) = request.origin.filter(|value| !value.is_empty()) else {
            return CorsDecision::NotApplicable;
        };

        if Self::is_preflight(request) {
            CorsDecision::Preflight(self.process_preflight(origin, request))
        } else {
            CorsDecision::Simple(self.process_simple(origin))
        }
    }

    /// A preflight is an OPTIONS request announcing the method of the actual
    /// request. A bare OPTIONS without that header is an ordinary request.
    fn is_preflight(request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
            && request
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }

    fn process_preflight(&self, origin: &str, request: &RequestContext<'_>) -> PreflightResult {
        let builder = HeaderBuilder::new(&self.options);
        let (mut headers, allowed) = builder.build_origin_headers(origin);

        if allowed {
            headers.extend(builder.build_credentials_header());
            headers.extend(builder.build_methods_header());
            headers.extend(builder.build_allowed_headers(request));
            headers.extend(builder.build_max_age_header());
        }

        PreflightResult {
            allowed,
            headers: headers.into_headers(),
            status: PREFLIGHT_SUCCESS_STATUS,
        }
    }

    fn process_simple(&self, origin: &str) -> SimpleResult {
        let builder = HeaderBuilder::new(&self.options);
        let (mut headers, allowed) = builder.build_origin_headers(origin);

        if allowed {
            headers.extend(builder.build_credentials_header());
        }

        SimpleResult {
            allowed,
            headers: headers.into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
