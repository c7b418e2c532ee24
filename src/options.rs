use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::util::is_http_token;
use thiserror::Error;

/// Static policy configuration, loaded once at startup and immutable after
/// [`Cors::new`](crate::Cors::new) accepts it.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    /// Master switch. Deployments where a reverse proxy serves frontend and
    /// backend under one origin see no cross-origin traffic and run with
    /// this off; every request then evaluates to
    /// [`CorsDecision::NotApplicable`](crate::CorsDecision::NotApplicable).
    pub enabled: bool,
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub credentials: bool,
    /// Seconds a browser may cache a preflight decision.
    pub max_age: Option<u64>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            origins: AllowedOrigins::list(["http://localhost:9011", "http://127.0.0.1:9011"]),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            credentials: true,
            max_age: Some(3600),
        }
    }
}

/// Configuration errors reported at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentialed responses must echo a specific origin; a wildcard origin is forbidden by the CORS specification"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("allowed header lists cannot contain \"*\"; use AllowedHeaders::any() instead")]
    AllowedHeadersListCannotContainWildcard,
    #[error("{0:?} is not a valid HTTP method token")]
    InvalidMethodToken(String),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && self.origins.is_wildcard() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }
        if self.allowed_headers.contains_wildcard() {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }
        if let Some(invalid) = self.methods.iter().find(|value| !is_http_token(value)) {
            return Err(ValidationError::InvalidMethodToken(invalid.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
