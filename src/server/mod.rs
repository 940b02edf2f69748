//! HTTP boundary: route registration and shared state
//!
//! Thin glue over the renderer; all validation failures surface as JSON
//! bodies with a `detail` field.

mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::fonts::FontStore;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub fonts: Arc<FontStore>,
}

impl ServerState {
    pub fn new(fonts: FontStore) -> Self {
        ServerState {
            fonts: Arc::new(fonts),
        }
    }
}

/// Build the service router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/health", get(handlers::handle_health))
        .route("/pagination/:page_number", get(handlers::handle_pagination))
        .with_state(state)
}
