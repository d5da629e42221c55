use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, http::StatusCode, response::Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::client::{ClientError, ScoreApi};
use crate::routes::handler::{HeadlineAction, parse_headline_form};
use crate::routes::{UiState, create_router};
use crate::session::{HeadlineSession, MSG_LABEL_MISMATCH, MSG_NOTHING_TO_SCORE, MSG_SCORED};

/// Scripted API: answers every call with `reply` and records what was sent.
struct ScriptedApi {
    reply: Box<dyn Fn(&[String]) -> Result<Vec<String>, ClientError> + Send + Sync>,
    sent: StdMutex<Vec<(String, Duration, Vec<String>)>>,
}

impl ScriptedApi {
    fn new(
        reply: impl Fn(&[String]) -> Result<Vec<String>, ClientError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            sent: StdMutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<(String, Duration, Vec<String>)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScoreApi for ScriptedApi {
    async fn score(
        &self,
        api_url: &str,
        timeout: Duration,
        headlines: &[String],
    ) -> Result<Vec<String>, ClientError> {
        self.sent
            .lock()
            .unwrap()
            .push((api_url.to_string(), timeout, headlines.to_vec()));
        (self.reply)(headlines)
    }
}

fn labels_for(headlines: &[String]) -> Result<Vec<String>, ClientError> {
    Ok(headlines.iter().map(|h| format!("L:{h}")).collect())
}

fn app(headlines: &[&str], api: Arc<ScriptedApi>) -> (Router, UiState) {
    let session = HeadlineSession::default().with_headlines(headlines.iter().copied());
    let state = UiState::new(session, api);
    (create_router(state.clone()), state)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn page(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn submit(app: &Router, uri: &str, body: &str) {
    let response = app.clone().oneshot(form_post(uri, body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
}

#[test]
fn test_parse_headline_form() {
    let fields = vec![
        ("headline".to_string(), "a".to_string()),
        ("headline".to_string(), "b".to_string()),
        ("action".to_string(), "score".to_string()),
    ];
    assert_eq!(
        parse_headline_form(fields),
        (vec!["a".to_string(), "b".to_string()], HeadlineAction::Score)
    );

    let fields = vec![
        ("headline".to_string(), "a".to_string()),
        ("delete".to_string(), "0".to_string()),
    ];
    assert_eq!(parse_headline_form(fields).1, HeadlineAction::Delete(0));

    assert_eq!(parse_headline_form(Vec::new()).1, HeadlineAction::Save);
}

#[tokio::test]
async fn test_index_renders_samples() {
    let api = ScriptedApi::new(labels_for);
    let (app, _) = create_default(api);

    let html = page(&app).await;
    assert!(html.contains("Tech stocks rally as AI demand grows"));
    assert!(html.contains("http://127.0.0.1:8081"));
}

fn create_default(api: Arc<ScriptedApi>) -> (Router, UiState) {
    let state = UiState::new(HeadlineSession::default(), api);
    (create_router(state.clone()), state)
}

#[tokio::test]
async fn test_delete_last_headline_leaves_blank_row() {
    let (app, state) = app(&["only"], ScriptedApi::new(labels_for));

    submit(&app, "/headlines", "headline=only&delete=0").await;

    assert_eq!(state.session.lock().await.headlines(), [""]);
}

#[tokio::test]
async fn test_edits_apply_before_action() {
    let (app, state) = app(&["a", "b"], ScriptedApi::new(labels_for));

    submit(&app, "/headlines", "headline=A1&headline=B1&action=add").await;

    assert_eq!(state.session.lock().await.headlines(), ["A1", "B1", ""]);
}

#[tokio::test]
async fn test_remove_empty_and_clear() {
    let (app, state) = app(&["a", " ", "b"], ScriptedApi::new(labels_for));

    submit(&app, "/headlines", "action=remove_empty").await;
    assert_eq!(state.session.lock().await.headlines(), ["a", "b"]);

    submit(&app, "/headlines", "action=clear").await;
    assert_eq!(state.session.lock().await.headlines(), [""]);
}

#[tokio::test]
async fn test_bulk_load() {
    let (app, state) = app(&["old"], ScriptedApi::new(labels_for));

    submit(&app, "/bulk", "text=first%0A%0A++second+%0A").await;

    assert_eq!(state.session.lock().await.headlines(), ["first", "second"]);
    assert!(page(&app).await.contains("Loaded 2 headlines."));
}

#[tokio::test]
async fn test_bulk_load_blank_warns() {
    let (app, state) = app(&["old"], ScriptedApi::new(labels_for));

    submit(&app, "/bulk", "text=%0A+%0A").await;

    assert_eq!(state.session.lock().await.headlines(), ["old"]);
    assert!(page(&app).await.contains("No non-empty lines found."));
}

#[tokio::test]
async fn test_score_merges_labels_and_renders_table() {
    let api = ScriptedApi::new(labels_for);
    let (app, _) = app(&["Good news", "", "Bad news"], api.clone());

    submit(
        &app,
        "/headlines",
        "headline=Good+news&headline=&headline=Bad+news&action=score",
    )
    .await;

    let sent = api.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "http://127.0.0.1:8081");
    assert_eq!(sent[0].1, Duration::from_secs(20));
    assert_eq!(sent[0].2, vec!["Good news", "Bad news"]);

    let html = page(&app).await;
    assert!(html.contains(MSG_SCORED));
    assert!(html.contains("<td>Good news</td><td>L:Good news</td>"));
    assert!(html.contains("<td>(empty)</td><td>n/a</td>"));
    assert!(html.contains("<td>Bad news</td><td>L:Bad news</td>"));

    // Shown once.
    assert!(!page(&app).await.contains("<table>"));
}

#[tokio::test]
async fn test_one_label_short_shows_error_and_no_table() {
    let api = ScriptedApi::new(|headlines: &[String]| {
        Ok(vec!["x".to_string(); headlines.len().saturating_sub(1)])
    });
    let (app, _) = app(&["a", "b"], api);

    submit(&app, "/headlines", "headline=a&headline=b&action=score").await;

    let html = page(&app).await;
    assert!(html.contains(MSG_LABEL_MISMATCH));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn test_score_with_only_blanks_skips_api() {
    let api = ScriptedApi::new(labels_for);
    let (app, _) = app(&["", " "], api.clone());

    submit(&app, "/headlines", "headline=&headline=+&action=score").await;

    assert!(api.sent().is_empty());
    assert!(page(&app).await.contains(MSG_NOTHING_TO_SCORE));
}

#[tokio::test]
async fn test_client_error_is_shown() {
    let api = ScriptedApi::new(|_: &[String]| {
        Err(ClientError::Status {
            code: 500,
            body: "{\"detail\":\"Failed to score headlines\"}".to_string(),
        })
    });
    let (app, state) = app(&["a"], api);

    submit(&app, "/headlines", "headline=a&action=score").await;

    assert_eq!(state.session.lock().await.headlines(), ["a"]);
    let html = page(&app).await;
    assert!(html.contains("API returned HTTP 500: "));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn test_settings_update_and_clamp() {
    let api = ScriptedApi::new(labels_for);
    let (app, state) = app(&["a"], api.clone());

    submit(
        &app,
        "/settings",
        "api_url=http%3A%2F%2Fscorer.local%3A9000%2F&timeout_secs=999",
    )
    .await;
    {
        let session = state.session.lock().await;
        assert_eq!(session.api_url(), "http://scorer.local:9000/");
        assert_eq!(session.timeout_secs(), 120);
    }

    submit(&app, "/headlines", "headline=a&action=score").await;
    assert_eq!(api.sent()[0].0, "http://scorer.local:9000/");
    assert_eq!(api.sent()[0].1, Duration::from_secs(120));
}

#[tokio::test]
async fn test_settings_reject_bad_url() {
    let (app, state) = app(&["a"], ScriptedApi::new(labels_for));

    submit(&app, "/settings", "api_url=ftp%3A%2F%2Fx&timeout_secs=5").await;

    assert_eq!(state.session.lock().await.api_url(), "http://127.0.0.1:8081");
    assert!(page(&app).await.contains("notice error"));
}
