//! Routes for the marketplace screens: navigation and the current view.

use axum::extract::State;
use axum::{
    Json, Router,
    routing::{get, post},
};
use craftconnect_booking::application::query_handlers::{MarketplaceView, get_marketplace_view};
use craftconnect_booking::application::session::{Dispatched, MarketplaceAction};
use craftconnect_navigation::domain::screen::Screen;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /navigate.
#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    /// Kebab-case screen name, e.g. `bookings-list`.
    pub screen: String,
}

/// Request body for POST /select-provider.
#[derive(Debug, Deserialize)]
pub struct SelectProviderRequest {
    pub provider_id: u32,
}

/// Request body for POST /search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Response body for every marketplace and booking action: how the action
/// resolved, plus the screen to render next.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    #[serde(flatten)]
    pub dispatched: Dispatched,
    pub view: MarketplaceView,
}

/// Runs one action against the shared session and renders the result.
pub(crate) fn dispatch(
    state: &AppState,
    action: MarketplaceAction,
) -> Result<Json<ActionResponse>, ApiError> {
    let mut session = state.session();
    let dispatched = session.dispatch(action, state.notifier.as_ref(), state.clock.as_ref())?;
    let view = get_marketplace_view(&session);
    Ok(Json(ActionResponse { dispatched, view }))
}

/// GET /
async fn current_view(State(state): State<AppState>) -> Json<MarketplaceView> {
    Json(get_marketplace_view(&state.session()))
}

/// POST /navigate
#[instrument(skip(state, request), fields(screen = %request.screen))]
async fn navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let screen: Screen = request.screen.parse()?;
    dispatch(&state, MarketplaceAction::GoTo(screen))
}

/// POST /select-provider
#[instrument(skip(state, request), fields(provider_id = request.provider_id))]
async fn select_provider(
    State(state): State<AppState>,
    Json(request): Json<SelectProviderRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    dispatch(&state, MarketplaceAction::SelectProvider(request.provider_id))
}

/// POST /back
#[instrument(skip(state))]
async fn back(State(state): State<AppState>) -> Result<Json<ActionResponse>, ApiError> {
    dispatch(&state, MarketplaceAction::Back)
}

/// POST /search
#[instrument(skip(state, request))]
async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    dispatch(&state, MarketplaceAction::UpdateSearch(request.query))
}

/// Returns the router for the marketplace screens.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_view))
        .route("/navigate", post(navigate))
        .route("/select-provider", post(select_provider))
        .route("/back", post(back))
        .route("/search", post(search))
}
