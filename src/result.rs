use thiserror::Error;

/// Errors raised while writing CORS decisions onto a response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorsError {
    #[error("`{name}` is not a valid HTTP header name")]
    InvalidHeaderName { name: &'static str },
    #[error("value {value:?} cannot be used for the `{name}` header")]
    InvalidHeaderValue { name: &'static str, value: String },
    #[error("{0} is not a valid HTTP status code")]
    InvalidStatus(u16),
}

/// Problems found by [`PolicyConfig::validate`](crate::PolicyConfig::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed method {0:?} is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("header name {0:?} is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("allowed origin {0:?} cannot be echoed as a header value")]
    InvalidOrigin(String),
    #[error(
        "credentials are enabled together with a wildcard origin; every requesting origin will be echoed with credentials allowed"
    )]
    CredentialsWithWildcardOrigin,
}
