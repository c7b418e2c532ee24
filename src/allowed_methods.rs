use crate::constants::method;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Methods are emitted in configured order and preserve caller casing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if !deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&trimmed))
            {
                deduped.push(trimmed);
            }
        }

        Self { values: deduped }
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(", "))
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
