//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use craftconnect_catalog::Catalog;
use craftconnect_catalog::script::MessageScript;
use craftconnect_core::clock::Clock;
use craftconnect_hearts::application::runner::GameRunner;
use craftconnect_hearts::domain::config::GameConfig;
use craftconnect_test_support::{MockRng, RecordingNotifier, fixed_clock};
use http_body_util::BodyExt;
use tower::ServiceExt;

use craftconnect_api::build_app;
use craftconnect_api::state::AppState;

/// App plus the notifier it reports booking acknowledgments to.
pub struct TestApp {
    pub router: Router,
    pub notifier: Arc<RecordingNotifier>,
}

/// Build the full app router with a fixed clock, the default message
/// script and a `MockRng` (every heart spawns at x = 0, speed 2).
pub fn build_test_app() -> TestApp {
    build_test_app_with_script(MessageScript::default())
}

/// Build the full app router with a custom hearts script.
pub fn build_test_app_with_script(script: MessageScript) -> TestApp {
    let clock: Arc<dyn Clock> = Arc::new(fixed_clock());
    let notifier = Arc::new(RecordingNotifier::new());
    let hearts = GameRunner::new(
        script,
        GameConfig::default(),
        Box::new(MockRng),
        Arc::clone(&clock),
    );
    let app_state = AppState::new(
        Arc::new(Catalog::sample()),
        hearts,
        clock,
        notifier.clone(),
    );

    TestApp {
        router: build_app(app_state),
        notifier,
    }
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with an empty JSON object.
pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    post_json(app, uri, &serde_json::json!({})).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
