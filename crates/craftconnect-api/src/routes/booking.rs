//! Routes for the booking wizard.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use chrono::NaiveDate;
use craftconnect_booking::application::session::MarketplaceAction;
use craftconnect_booking::domain::step::{Schedule, TimeSlot};
use serde::Deserialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::routes::marketplace::{ActionResponse, dispatch};
use crate::state::AppState;

/// Request body for POST /select-service.
#[derive(Debug, Deserialize)]
pub struct SelectServiceRequest {
    pub service: String,
}

/// Request body for POST /describe-project.
#[derive(Debug, Deserialize)]
pub struct DescribeProjectRequest {
    pub description: String,
}

/// Request body for POST /schedule.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub slot: TimeSlot,
    #[serde(default)]
    pub address: String,
}

/// POST /select-service
#[instrument(skip(state, request), fields(service = %request.service))]
async fn select_service(
    State(state): State<AppState>,
    Json(request): Json<SelectServiceRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    dispatch(&state, MarketplaceAction::SelectService(request.service))
}

/// POST /describe-project
#[instrument(skip(state, request))]
async fn describe_project(
    State(state): State<AppState>,
    Json(request): Json<DescribeProjectRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    dispatch(&state, MarketplaceAction::DescribeProject(request.description))
}

/// POST /schedule
#[instrument(skip(state, request), fields(slot = ?request.slot))]
async fn schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let schedule = Schedule {
        date: request.date,
        slot: request.slot,
        address: request.address,
    };
    dispatch(&state, MarketplaceAction::SetSchedule(schedule))
}

/// POST /continue
#[instrument(skip(state))]
async fn continue_step(State(state): State<AppState>) -> Result<Json<ActionResponse>, ApiError> {
    dispatch(&state, MarketplaceAction::Continue)
}

/// POST /confirm
///
/// On success the response carries the acknowledgment and the booking
/// summary under `receipt`.
#[instrument(skip(state))]
async fn confirm(State(state): State<AppState>) -> Result<Json<ActionResponse>, ApiError> {
    dispatch(&state, MarketplaceAction::ConfirmAndPay)
}

/// Returns the router for the booking wizard.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/select-service", post(select_service))
        .route("/describe-project", post(describe_project))
        .route("/schedule", post(schedule))
        .route("/continue", post(continue_step))
        .route("/confirm", post(confirm))
}
