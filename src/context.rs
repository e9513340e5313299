/// Borrowed view of the two request fields the CORS stage reads.
///
/// Useful when the host moves the request into the next stage before the
/// response comes back, as async frameworks do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }
}
