pub mod analyze;
pub mod health;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Upper bound on request handling.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USAGE: &str = "Text analyzer API

Endpoint: POST /api/analyze

Example:
curl -X POST http://localhost:8080/api/analyze \\
  -H \"Content-Type: application/json\" \\
  -d '{\"text\":\"Hello, world! This is a sample text.\"}'
";

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(analyze::routes())
}

async fn home() -> &'static str {
    USAGE
}
