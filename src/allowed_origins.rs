use indexmap::IndexSet;

/// Configuration for which request `Origin` values receive CORS headers.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedOrigins {
    /// Wildcard: every origin is allowed and answered with `*`.
    /// Forbidden when credentials are enabled.
    #[default]
    Any,
    /// Exact-match allow list. Comparison is case-sensitive, matching the
    /// serialized origin the browser sends.
    List(IndexSet<String>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an allow list from the provided origins. Entries are trimmed
    /// and deduplicated; a `"*"` entry collapses the whole configuration to
    /// [`AllowedOrigins::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut origins = IndexSet::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed == "*" {
                return Self::Any;
            }
            if !trimmed.is_empty() {
                origins.insert(trimmed);
            }
        }

        Self::List(origins)
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(origins) => origins.contains(origin),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// The response depends on the request `Origin` whenever the
    /// configuration is narrower than the wildcard, so shared caches must be
    /// told to vary on it.
    pub(crate) fn vary_by_origin(&self) -> bool {
        !self.is_wildcard()
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
