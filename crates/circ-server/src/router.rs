use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use circ_chain::SharedChain;
use tower_http::trace::TraceLayer;

use crate::handler;

/// Build the axum router over a shared chain handle.
pub fn build_router(chain: Arc<SharedChain>) -> Router {
    Router::new()
        .route(
            "/",
            get(handler::list_blocks).post(handler::record_checkout),
        )
        .route("/new", post(handler::register_book))
        .route("/verify", get(handler::verify_chain))
        .route("/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(chain)
}
