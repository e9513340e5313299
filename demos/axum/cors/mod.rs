use std::sync::Arc;

use cors_policy_rs::{AllowOrigin, CorsMiddleware, HeaderList, PolicyConfig, ValidationError};

pub type SharedCors = Arc<CorsMiddleware>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let policy = PolicyConfig {
        allow_origin: AllowOrigin::list(["http://app.example.com"]),
        allow_methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
        allow_headers: HeaderList::list(["Content-Type", "X-Requested-With", "X-Example-Trace"]),
        expose_headers: HeaderList::list(["X-Example-Trace"]),
        max_age: 600,
        credentials: true,
        vary_origin: true,
        ..PolicyConfig::default()
    };

    let cors = Arc::new(CorsMiddleware::try_new(policy)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS demo!",
    })
}

pub mod middleware;
