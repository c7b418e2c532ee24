use crate::allowed_headers::AllowedHeaders;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Resolves the request origin against the allow list. Returns the
    /// origin-related headers plus whether the origin is allowed. Validation
    /// guarantees the wildcard arm never coexists with credentials, so `*`
    /// is safe to emit there.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> (HeaderCollection, bool) {
        let mut headers = HeaderCollection::new();

        if !self.options.origins.matches(origin) {
            if self.options.origins.vary_by_origin() {
                headers.add_vary(header::ORIGIN);
            }
            return (headers, false);
        }

        if self.options.origins.is_wildcard() {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        } else {
            headers.add_vary(header::ORIGIN);
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }

        (headers, true)
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match &self.options.allowed_headers {
            AllowedHeaders::Any => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if let Some(requested) = request.access_control_request_headers
                    && !requested.trim().is_empty()
                {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
                }
            }
            AllowedHeaders::List(values) => {
                if !values.is_empty() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, values.join(", "));
                }
            }
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.options.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, value.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
