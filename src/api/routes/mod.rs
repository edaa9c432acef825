//! API route modules.

pub mod checklist;
pub mod upload;

use super::AppState;
use axum::Router;

/// Create the combined `/api` router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(checklist::router(state.clone()))
        .merge(upload::router(state))
}
