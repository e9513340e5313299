use crate::constants::header;
use crate::context::RequestContext;
use crate::result::CorsError;
use http::{HeaderName, HeaderValue, Request, Response, StatusCode};

/// The parts of an incoming request the CORS stage reads.
pub trait CorsRequest {
    fn method(&self) -> &str;

    /// The `Origin` header, or `None` when it is absent or not valid text.
    fn origin(&self) -> Option<&str>;
}

/// The parts of an outgoing response the CORS stage writes.
pub trait CorsResponse {
    /// An empty `200` response, used when a preflight never reaches downstream.
    fn empty() -> Self
    where
        Self: Sized;

    fn status(&self) -> u16;

    fn set_status(&mut self, status: u16) -> Result<(), CorsError>;

    fn header(&self, name: &str) -> Option<&str>;

    /// Every value of `name` in the order received. Values that are not
    /// valid text are skipped.
    fn header_values(&self, name: &str) -> Vec<&str>;

    /// Sets `name` to `value`, replacing every existing value of that header.
    fn set_header(&mut self, name: &'static str, value: &str) -> Result<(), CorsError>;
}

impl CorsRequest for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn origin(&self) -> Option<&str> {
        self.origin
    }
}

impl<T: CorsRequest + ?Sized> CorsRequest for &T {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn origin(&self) -> Option<&str> {
        (**self).origin()
    }
}

impl<B> CorsRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn origin(&self) -> Option<&str> {
        self.headers()
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
    }
}

impl<B: Default> CorsResponse for Response<B> {
    fn empty() -> Self {
        Response::default()
    }

    fn status(&self) -> u16 {
        Response::status(self).as_u16()
    }

    fn set_status(&mut self, status: u16) -> Result<(), CorsError> {
        *self.status_mut() =
            StatusCode::from_u16(status).map_err(|_| CorsError::InvalidStatus(status))?;
        Ok(())
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers()
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect()
    }

    fn set_header(&mut self, name: &'static str, value: &str) -> Result<(), CorsError> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| CorsError::InvalidHeaderName { name })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| CorsError::InvalidHeaderValue {
                name,
                value: value.to_string(),
            })?;
        self.headers_mut().insert(header_name, header_value);
        Ok(())
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;
