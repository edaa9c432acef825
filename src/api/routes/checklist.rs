//! Checklist creation endpoint.

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::trello::{ChecklistOutcome, TrelloError};
use axum::{extract::State, response::Json, routing::post, Router};
use serde_json::Value;
use tracing::{error, info};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create-checklist", post(create_checklist))
        .with_state(state)
}

/// POST /api/create-checklist - Create a checklist on the configured card
/// and add the configured item to it.
async fn create_checklist(State(state): State<AppState>) -> ApiResult<Json<ChecklistOutcome>> {
    info!("Checklist creation requested via API");

    match state.trello.create_checklist_with_item(&state.target).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(TrelloError::ChecklistRejected { status, details }) => {
            error!("Checklist creation rejected with status {}", status);
            Err(ApiError::internal("Error creating checklist").with_details(details))
        }
        Err(err) => {
            error!("Checklist creation failed: {}", err);
            Err(ApiError::internal("Error creating checklist")
                .with_details(Value::String(err.to_string())))
        }
    }
}
