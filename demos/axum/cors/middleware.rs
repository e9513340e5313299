use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_policy_rs::{CorsError, RequestContext, constants::header, preflight_response};

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();

    // The request moves into `next`, so keep the two fields the policy reads.
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let context = owned_ctx.as_request_context();

    let mut response = if cors.short_circuits(&context) {
        match preflight_response::<Response>() {
            Ok(response) => response,
            Err(err) => return middleware_error_response(err),
        }
    } else {
        next.run(request).await
    };

    match cors.apply(&context, &mut response) {
        Ok(()) => response,
        Err(err) => middleware_error_response(err),
    }
}

fn middleware_error_response(err: CorsError) -> Response {
    let mut response = Response::new(Body::from(format!("CORS policy error: {err}")));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(request.headers(), header::ORIGIN),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext::new(&self.method, self.origin.as_deref())
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
