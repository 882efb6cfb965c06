//! Routes for the hearts game.

use axum::extract::State;
use axum::{
    Json, Router,
    routing::{get, post},
};
use craftconnect_core::aggregate::Transition;
use craftconnect_hearts::application::query_handlers::HeartsView;
use craftconnect_hearts::domain::events::HeartId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Request body for POST /catch.
#[derive(Debug, Deserialize)]
pub struct CatchRequest {
    pub heart_id: u64,
}

/// Response body for game actions.
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub transition: Transition,
    pub view: HeartsView,
}

fn respond(state: &AppState, transition: Transition) -> Json<GameResponse> {
    Json(GameResponse {
        transition,
        view: state.hearts.view(),
    })
}

/// GET /
async fn current_view(State(state): State<AppState>) -> Json<HeartsView> {
    Json(state.hearts.view())
}

/// POST /start
#[instrument(skip(state))]
async fn start(State(state): State<AppState>) -> Json<GameResponse> {
    let transition = state.hearts.start();
    respond(&state, transition)
}

/// POST /catch
#[instrument(skip(state, request), fields(heart_id = request.heart_id))]
async fn catch(
    State(state): State<AppState>,
    Json(request): Json<CatchRequest>,
) -> Json<GameResponse> {
    let transition = state.hearts.catch(HeartId(request.heart_id));
    respond(&state, transition)
}

/// POST /restart
#[instrument(skip(state))]
async fn restart(State(state): State<AppState>) -> Json<GameResponse> {
    let transition = state.hearts.restart();
    respond(&state, transition)
}

/// POST /stop
#[instrument(skip(state))]
async fn stop(State(state): State<AppState>) -> Json<GameResponse> {
    let transition = state.hearts.stop();
    respond(&state, transition)
}

/// Returns the router for the hearts game.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_view))
        .route("/start", post(start))
        .route("/catch", post(catch))
        .route("/restart", post(restart))
        .route("/stop", post(stop))
}
