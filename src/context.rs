/// Borrowed view of the request fields the evaluator inspects.
///
/// `origin` is `None` for same-origin or non-browser requests; the two
/// `access_control_request_*` fields are only present on preflights.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
