use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info, instrument};

use crate::gateway::error::ApiError;
use crate::gateway::payload::{ScoreRequest, ScoreResponse};
use crate::gateway::state::AppState;
use headlines::classifier::Predictor;
use headlines::embedding::Encoder;
use headlines::scoring::clean_headlines;

#[instrument(skip(state, payload), fields(received = tracing::field::Empty))]
pub async fn score_headlines_handler<E, P>(
    State(state): State<AppState<E, P>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, ApiError>
where
    E: Encoder + 'static,
    P: Predictor + 'static,
{
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    tracing::Span::current().record("received", request.headlines.len());

    if request.headlines.is_empty() {
        return Err(ApiError::EmptyHeadlines);
    }

    let headlines = clean_headlines(&request.headlines);
    if headlines.is_empty() {
        return Err(ApiError::BlankHeadlines);
    }
    debug!(count = headlines.len(), "Scoring cleaned headlines");

    let scorer = state.scorer.clone();
    let labels = tokio::task::spawn_blocking(move || scorer.score(&headlines))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    info!(count = labels.len(), "Headlines scored");
    Ok(Json(ScoreResponse { labels }))
}
