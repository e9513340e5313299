use crate::constants::defaults;
use crate::header_list::HeaderList;
use crate::origin::AllowOrigin;
use crate::preflight::PreflightMode;
use crate::result::ValidationError;
use crate::util::{is_header_value_text, is_http_token};
use serde::Deserialize;

/// Process-wide CORS policy.
///
/// Built once at startup, either with struct-update syntax over
/// [`PolicyConfig::default`] or deserialized from the host's resolved
/// configuration, where every key is optional and falls back to its default.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyConfig {
    pub allow_origin: AllowOrigin,
    pub allow_methods: Vec<String>,
    pub allow_headers: HeaderList,
    pub expose_headers: HeaderList,
    pub max_age: u64,
    pub credentials: bool,
    pub preflight: PreflightMode,
    pub vary_origin: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allow_origin: AllowOrigin::Any,
            allow_methods: defaults::ALLOW_METHODS.iter().map(|m| m.to_string()).collect(),
            allow_headers: HeaderList::Any,
            expose_headers: HeaderList::Deny,
            max_age: defaults::MAX_AGE,
            credentials: false,
            preflight: PreflightMode::default(),
            vary_origin: false,
        }
    }
}

impl PolicyConfig {
    /// Checks that every configured value can be written as a header and
    /// flags a wildcard origin combined with credentials.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(method) = self
            .allow_methods
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some(name) = self
            .allow_headers
            .names()
            .iter()
            .chain(self.expose_headers.names())
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.clone()));
        }

        if let AllowOrigin::List(origins) = &self.allow_origin
            && let Some(origin) = origins.iter().find(|origin| !is_header_value_text(origin))
        {
            return Err(ValidationError::InvalidOrigin(origin.clone()));
        }

        if self.credentials && self.has_wildcard_origin() {
            return Err(ValidationError::CredentialsWithWildcardOrigin);
        }

        Ok(())
    }

    fn has_wildcard_origin(&self) -> bool {
        match &self.allow_origin {
            AllowOrigin::Any => true,
            AllowOrigin::List(origins) => origins.iter().any(|o| o == defaults::WILDCARD),
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
