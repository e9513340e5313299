use crate::constants::header;
use crate::headers::{HeaderSet, merge_vary};
use crate::message::CorsResponse;
use crate::policy::PolicyConfig;
use crate::result::CorsError;
use crate::util::is_header_value_text;
use tracing::trace;

/// Computes and writes the CORS response headers for one policy.
pub struct HeaderBuilder<'a> {
    policy: &'a PolicyConfig,
}

impl<'a> HeaderBuilder<'a> {
    pub fn new(policy: &'a PolicyConfig) -> Self {
        Self { policy }
    }

    pub fn build_methods_header(&self) -> String {
        self.policy.allow_methods.join(",")
    }

    pub fn build_allowed_headers(&self) -> String {
        self.policy.allow_headers.header_value()
    }

    pub fn build_exposed_headers(&self) -> String {
        self.policy.expose_headers.header_value()
    }

    pub fn build_credentials_header(&self) -> &'static str {
        if self.policy.credentials {
            "true"
        } else {
            "false"
        }
    }

    pub fn build_max_age_header(&self) -> String {
        self.policy.max_age.to_string()
    }

    /// The five headers that do not depend on the request.
    pub fn build_policy_headers(&self) -> HeaderSet {
        let mut headers = HeaderSet::with_estimate(5);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.build_methods_header(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.build_allowed_headers(),
        );
        headers.insert(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.build_exposed_headers(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            self.build_credentials_header(),
        );
        headers.insert(header::ACCESS_CONTROL_MAX_AGE, self.build_max_age_header());
        headers
    }

    /// All six headers, `Access-Control-Allow-Origin` first.
    pub fn build_headers(&self, allowed_origin: &str) -> HeaderSet {
        let mut headers = HeaderSet::new();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allowed_origin);
        for (name, value) in self.build_policy_headers().into_headers() {
            headers.insert(name, value);
        }
        headers
    }

    /// Overwrites the six headers on `response`, and merges `Origin` into
    /// `Vary` when the policy asks for it and the origin value is per-request.
    ///
    /// Every value is checked before the first write, so an error leaves
    /// `response` untouched.
    pub fn apply<R: CorsResponse>(
        &self,
        response: &mut R,
        allowed_origin: &str,
    ) -> Result<(), CorsError> {
        let headers = self.build_headers(allowed_origin);
        if let Some((name, value)) = headers
            .iter()
            .find(|(_, value)| !is_header_value_text(value))
        {
            return Err(CorsError::InvalidHeaderValue {
                name,
                value: value.to_string(),
            });
        }

        let vary = if self.policy.vary_origin
            && self
                .policy
                .allow_origin
                .depends_on_request(self.policy.credentials)
        {
            Some(merge_vary(
                &response.header_values(header::VARY),
                header::ORIGIN,
            ))
        } else {
            None
        };

        for (name, value) in headers.iter() {
            response.set_header(name, value)?;
        }
        if let Some(vary) = vary {
            response.set_header(header::VARY, &vary)?;
        }
        trace!(headers = ?headers, "CORS: headers applied");

        Ok(())
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
