use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedHeaders {
    /// Wildcard semantics: any request header is permitted and the
    /// preflight's `Access-Control-Request-Headers` value is echoed back
    /// verbatim. A literal `*` is not emitted because browsers ignore it for
    /// credentialed requests.
    #[default]
    Any,
    /// Explicit allow list, emitted as a comma-separated value.
    List(Vec<String>),
}

impl AllowedHeaders {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an allow list, trimming whitespace and removing duplicates
    /// case-insensitively while preserving caller casing.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            let key = trimmed.to_ascii_lowercase();
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub(crate) fn contains_wildcard(&self) -> bool {
        match self {
            Self::Any => false,
            Self::List(values) => values.iter().any(|value| value == "*"),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
