use crate::constants::{defaults, method};
use crate::message::CorsResponse;
use crate::result::CorsError;
use serde::Deserialize;

/// How `OPTIONS` requests move through the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreflightMode {
    /// Call the downstream stages, then force the status to `200`.
    #[default]
    Passthrough,
    /// Answer from the policy alone; downstream never sees the request.
    ShortCircuit,
}

/// Exact, case-sensitive match on the `OPTIONS` method token.
pub fn is_preflight(method: &str) -> bool {
    method == method::OPTIONS
}

/// Forces a preflight response to `200`, leaving its headers untouched.
pub fn finalize_preflight<R: CorsResponse>(response: &mut R) -> Result<(), CorsError> {
    response.set_status(defaults::PREFLIGHT_STATUS)
}

/// The empty response answered in [`PreflightMode::ShortCircuit`].
pub fn preflight_response<R: CorsResponse>() -> Result<R, CorsError> {
    let mut response = R::empty();
    finalize_preflight(&mut response)?;
    Ok(response)
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
