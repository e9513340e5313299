use crate::constants::defaults::WILDCARD;
use serde::Deserialize;
use tracing::debug;

/// Which request origins receive a CORS grant.
///
/// `Any` is the configured wildcard `"*"`. `List` is an allow-list compared
/// with exact, case-sensitive equality; a `"*"` member turns the list into an
/// echo-everything list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAllowOrigin")]
pub enum AllowOrigin {
    #[default]
    Any,
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAllowOrigin {
    One(String),
    Many(Vec<String>),
}

impl From<RawAllowOrigin> for AllowOrigin {
    fn from(raw: RawAllowOrigin) -> Self {
        match raw {
            RawAllowOrigin::One(value) if value == WILDCARD => AllowOrigin::Any,
            RawAllowOrigin::One(value) => AllowOrigin::List(vec![value]),
            RawAllowOrigin::Many(values) => AllowOrigin::List(values),
        }
    }
}

impl AllowOrigin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Whether `origin` is granted by this configuration.
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            AllowOrigin::Any => true,
            AllowOrigin::List(values) => values
                .iter()
                .any(|value| value == WILDCARD || value == origin),
        }
    }

    /// Whether the resolved `Access-Control-Allow-Origin` value can change from
    /// one request origin to the next.
    pub fn depends_on_request(&self, credentials: bool) -> bool {
        match self {
            AllowOrigin::Any => credentials,
            AllowOrigin::List(_) => true,
        }
    }
}

/// Computes the `Access-Control-Allow-Origin` value for `request_origin`.
///
/// An empty return value denies the grant while still letting the request
/// through. A missing `Origin` header is passed as `""`.
pub fn resolve_allowed_origin<'a>(
    request_origin: &'a str,
    allow_origin: &AllowOrigin,
    credentials: bool,
) -> &'a str {
    match allow_origin {
        AllowOrigin::Any if credentials => request_origin,
        AllowOrigin::Any => WILDCARD,
        AllowOrigin::List(_) if allow_origin.allows(request_origin) => request_origin,
        AllowOrigin::List(_) => {
            debug!(origin = request_origin, "CORS: origin not in allow-list");
            ""
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
