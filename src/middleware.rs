use crate::header_builder::HeaderBuilder;
use crate::message::{CorsRequest, CorsResponse};
use crate::origin::resolve_allowed_origin;
use crate::pipeline::{BoxError, Middleware, Next};
use crate::policy::PolicyConfig;
use crate::preflight::{PreflightMode, finalize_preflight, is_preflight, preflight_response};
use crate::result::{CorsError, ValidationError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Name the CORS stage registers under in a [`Pipeline`](crate::Pipeline).
pub const STAGE_NAME: &str = "cors";

/// CORS stage wrapping the next handler of a request pipeline.
///
/// The policy is shared behind an [`Arc`], so clones are cheap and one
/// instance serves every thread.
#[derive(Clone, Debug)]
pub struct CorsMiddleware {
    policy: Arc<PolicyConfig>,
}

impl CorsMiddleware {
    /// Accepts any policy. Problems reported by [`PolicyConfig::validate`] are
    /// logged and the policy is used as configured.
    pub fn new(policy: impl Into<Arc<PolicyConfig>>) -> Self {
        let policy = policy.into();
        if let Err(err) = policy.validate() {
            warn!(error = %err, "CORS: policy accepted with validation problem");
        }
        Self { policy }
    }

    /// Rejects a policy that [`PolicyConfig::validate`] reports a problem for.
    pub fn try_new(policy: impl Into<Arc<PolicyConfig>>) -> Result<Self, ValidationError> {
        let policy = policy.into();
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// True when `handle` answers this request without calling downstream.
    pub fn short_circuits<Req: CorsRequest + ?Sized>(&self, request: &Req) -> bool {
        self.policy.preflight == PreflightMode::ShortCircuit && is_preflight(request.method())
    }

    /// Runs `next`, then overlays the CORS headers and, for `OPTIONS`, forces
    /// status `200`. Errors from `next` are returned untouched.
    pub fn handle<Req, Resp, E, F>(&self, request: &Req, next: F) -> Result<Resp, E>
    where
        Req: CorsRequest + ?Sized,
        Resp: CorsResponse,
        E: From<CorsError>,
        F: FnOnce(&Req) -> Result<Resp, E>,
    {
        let mut response: Resp = if self.short_circuits(request) {
            debug!("CORS: answering preflight without calling downstream");
            preflight_response()?
        } else {
            next(request)?
        };

        self.apply(request, &mut response)?;
        Ok(response)
    }

    /// The post-downstream half of [`handle`](Self::handle), for hosts that
    /// drive the downstream call themselves.
    pub fn apply<Req, Resp>(&self, request: &Req, response: &mut Resp) -> Result<(), CorsError>
    where
        Req: CorsRequest + ?Sized,
        Resp: CorsResponse,
    {
        let allowed_origin = resolve_allowed_origin(
            request.origin().unwrap_or_default(),
            &self.policy.allow_origin,
            self.policy.credentials,
        );
        HeaderBuilder::new(&self.policy).apply(response, allowed_origin)?;

        if is_preflight(request.method()) {
            finalize_preflight(response)?;
        }
        Ok(())
    }
}

impl<Req, Resp> Middleware<Req, Resp> for CorsMiddleware
where
    Req: CorsRequest,
    Resp: CorsResponse,
{
    fn name(&self) -> &str {
        STAGE_NAME
    }

    fn process(&self, request: &Req, next: Next<'_, Req, Resp>) -> Result<Resp, BoxError> {
        self.handle(request, |request| next.run(request))
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
