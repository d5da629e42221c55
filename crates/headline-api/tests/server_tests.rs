mod common;

use common::harness::spawn_test_server;
use serde_json::json;

#[tokio::test]
async fn test_status_over_http() {
    let server = spawn_test_server().await.unwrap();

    let resp = reqwest::get(format!("{}/status", server.url()))
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"status": "OK"}));
}

#[tokio::test]
async fn test_score_over_http_with_stub_encoder() {
    let server = spawn_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/score_headlines", server.url()))
        .json(&json!({"headlines": ["Tech stocks rally", "", "Oil prices fall"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let labels = body["labels"].as_array().unwrap();
    assert_eq!(labels.len(), 2);
    for label in labels {
        let label = label.as_str().unwrap();
        assert!(label == "Optimistic" || label == "Pessimistic");
    }
}

#[tokio::test]
async fn test_same_headline_scores_consistently() {
    let server = spawn_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/score_headlines", server.url()))
        .json(&json!({"headlines": ["Same text", "Same text"]}))
        .send()
        .await
        .unwrap();

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["labels"][0], body["labels"][1]);
}

#[tokio::test]
async fn test_blank_request_over_http() {
    let server = spawn_test_server().await.unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/score_headlines", server.url()))
        .json(&json!({"headlines": ["   "]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"detail": "headlines must contain text"}));
}
