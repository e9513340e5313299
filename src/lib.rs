pub mod constants;
mod context;
mod header_builder;
mod header_list;
mod headers;
mod message;
mod middleware;
mod origin;
mod pipeline;
mod policy;
mod preflight;
mod result;
mod util;

pub use context::RequestContext;
pub use header_builder::HeaderBuilder;
pub use header_list::HeaderList;
pub use headers::{HeaderSet, Headers};
pub use message::{CorsRequest, CorsResponse};
pub use middleware::{CorsMiddleware, STAGE_NAME};
pub use origin::{AllowOrigin, resolve_allowed_origin};
pub use pipeline::{BoxError, Middleware, Next, Pipeline, PipelineError};
pub use policy::PolicyConfig;
pub use preflight::{PreflightMode, finalize_preflight, is_preflight, preflight_response};
pub use result::{CorsError, ValidationError};
