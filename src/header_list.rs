use crate::constants::defaults::WILDCARD;
use serde::Deserialize;

/// Configuration shared by `Access-Control-Allow-Headers` and
/// `Access-Control-Expose-Headers`.
///
/// Deserializes from `true` (`Any`), `false` (`Deny`) or an array of header
/// names (`List`). Names are passed through exactly as configured.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawHeaderList")]
pub enum HeaderList {
    /// Emit the wildcard `*`.
    Any,
    /// Emit an empty value.
    Deny,
    /// Emit the names comma-joined in configured order.
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeaderList {
    Flag(bool),
    Names(Vec<String>),
}

impl From<RawHeaderList> for HeaderList {
    fn from(raw: RawHeaderList) -> Self {
        match raw {
            RawHeaderList::Flag(true) => HeaderList::Any,
            RawHeaderList::Flag(false) => HeaderList::Deny,
            RawHeaderList::Names(names) => HeaderList::List(names),
        }
    }
}

impl From<bool> for HeaderList {
    fn from(value: bool) -> Self {
        if value {
            HeaderList::Any
        } else {
            HeaderList::Deny
        }
    }
}

impl HeaderList {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn deny() -> Self {
        Self::Deny
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> String {
        match self {
            Self::Any => WILDCARD.to_string(),
            Self::Deny => String::new(),
            Self::List(values) => values.join(","),
        }
    }

    /// Returns the explicitly configured names; empty for `Any` and `Deny`.
    pub fn names(&self) -> &[String] {
        match self {
            Self::List(values) => values,
            Self::Any | Self::Deny => &[],
        }
    }
}

#[cfg(test)]
#[path = "header_list_test.rs"]
mod header_list_test;
