//! HTTP gateway (Axum) for headline scoring.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use handler::score_headlines_handler;
pub use payload::{ErrorResponse, ScoreRequest, ScoreResponse, StatusResponse};
pub use state::AppState;

use headlines::classifier::Predictor;
use headlines::embedding::Encoder;

pub fn create_router_with_state<E, P>(state: AppState<E, P>) -> Router
where
    E: Encoder + 'static,
    P: Predictor + 'static,
{
    Router::new()
        .route("/status", get(status_handler))
        .route("/score_headlines", post(score_headlines_handler::<E, P>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument]
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}
