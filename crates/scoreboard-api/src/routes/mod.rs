//! Route modules and the application router.

pub mod health;
pub mod scores;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::panic_response;
use crate::state::AppState;

/// Builds the complete application router over `state`.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        .merge(health::router())
        .nest("/api/v1/scores", scores::router())
        .with_state(state);
    with_middleware(routes)
}

/// Wraps `router` in the tracing, CORS and panic-to-500 layers.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
