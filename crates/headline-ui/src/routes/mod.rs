//! Routes for the browser UI.
//!
//! Every mutation is a form POST that redirects back to `/`; the page is
//! rendered from the session on the following GET.

pub mod handler;

#[cfg(test)]
mod handler_tests;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::client::ScoreApi;
use crate::session::HeadlineSession;

pub use handler::{bulk_handler, headlines_handler, index_handler, settings_handler};

#[derive(Clone)]
pub struct UiState {
    pub session: Arc<Mutex<HeadlineSession>>,
    pub api: Arc<dyn ScoreApi>,
}

impl UiState {
    pub fn new(session: HeadlineSession, api: Arc<dyn ScoreApi>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            api,
        }
    }
}

pub fn create_router(state: UiState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/headlines", post(headlines_handler))
        .route("/bulk", post(bulk_handler))
        .route("/settings", post(settings_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
