use std::time::Duration;

use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use headlines::config::validate_api_url;

use crate::render::{PageView, render_page};
use crate::routes::UiState;
use crate::session::Notice;

#[instrument(skip(state))]
pub async fn index_handler(State(state): State<UiState>) -> Html<String> {
    let view = {
        let mut session = state.session.lock().await;
        let (notice, results) = session.take_outcome();
        PageView {
            headlines: session.headlines().to_vec(),
            api_url: session.api_url().to_string(),
            timeout_secs: session.timeout_secs(),
            notice,
            results,
        }
    };

    Html(render_page(&view))
}

/// What the headline form asked for, after its field edits are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineAction {
    Save,
    Add,
    Delete(usize),
    RemoveEmpty,
    Clear,
    Score,
}

/// Splits the submitted pairs into the edited list and the requested action.
///
/// `headline` fields arrive in list order; a `delete` field wins over `action`.
pub fn parse_headline_form(fields: Vec<(String, String)>) -> (Vec<String>, HeadlineAction) {
    let mut edits = Vec::new();
    let mut action = HeadlineAction::Save;
    let mut delete = None;

    for (key, value) in fields {
        match key.as_str() {
            "headline" => edits.push(value),
            "delete" => delete = value.trim().parse().ok(),
            "action" => {
                action = match value.as_str() {
                    "add" => HeadlineAction::Add,
                    "remove_empty" => HeadlineAction::RemoveEmpty,
                    "clear" => HeadlineAction::Clear,
                    "score" => HeadlineAction::Score,
                    _ => HeadlineAction::Save,
                }
            }
            _ => {}
        }
    }

    match delete {
        Some(index) => (edits, HeadlineAction::Delete(index)),
        None => (edits, action),
    }
}

#[instrument(skip(state, fields))]
pub async fn headlines_handler(
    State(state): State<UiState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Redirect {
    let (edits, action) = parse_headline_form(fields);
    debug!(?action, edits = edits.len(), "Headline form submitted");

    let batch = {
        let mut session = state.session.lock().await;
        for (index, text) in edits.into_iter().enumerate() {
            session.edit(index, text);
        }

        match action {
            HeadlineAction::Save => None,
            HeadlineAction::Add => {
                session.add();
                None
            }
            HeadlineAction::Delete(index) => {
                session.delete(index);
                None
            }
            HeadlineAction::RemoveEmpty => {
                session.remove_empty();
                None
            }
            HeadlineAction::Clear => {
                session.clear();
                None
            }
            HeadlineAction::Score => session.begin_scoring(),
        }
    };

    // The lock is released while the API call is in flight.
    if let Some(batch) = batch {
        let outcome = state
            .api
            .score(
                &batch.api_url,
                Duration::from_secs(batch.timeout_secs),
                &batch.cleaned,
            )
            .await
            .map_err(|e| {
                warn!(error = %e, "Scoring call failed");
                e.to_string()
            });

        if let Ok(labels) = &outcome {
            info!(sent = batch.cleaned.len(), received = labels.len(), "Scoring call returned");
        }
        state.session.lock().await.finish_scoring(&batch, outcome);
    }

    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub struct BulkForm {
    #[serde(default)]
    pub text: String,
}

#[instrument(skip(state, form))]
pub async fn bulk_handler(State(state): State<UiState>, Form(form): Form<BulkForm>) -> Redirect {
    let loaded = state.session.lock().await.bulk_load(&form.text);
    debug!(loaded, "Bulk load");
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub api_url: String,
    #[serde(default)]
    pub timeout_secs: String,
}

#[instrument(skip(state, form))]
pub async fn settings_handler(
    State(state): State<UiState>,
    Form(form): Form<SettingsForm>,
) -> Redirect {
    let api_url = form.api_url.trim().to_string();
    let mut session = state.session.lock().await;

    if let Err(e) = validate_api_url(&api_url) {
        session.set_notice(Notice::error(e.to_string()));
        return Redirect::to("/");
    }

    let timeout_secs = form
        .timeout_secs
        .trim()
        .parse()
        .unwrap_or(session.timeout_secs());
    session.update_settings(api_url, timeout_secs);
    info!(api_url = %session.api_url(), timeout_secs = session.timeout_secs(), "Settings updated");

    Redirect::to("/")
}
