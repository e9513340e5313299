use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from another origin to see the CORS headers.</p>",
        state.greeting
    ))
}

/// The CORS layer forces the final status to 200 either way.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
