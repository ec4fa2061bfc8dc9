pub(crate) mod handlers;

#[cfg(test)]
mod tests;

use axum::routing::{get, post};
use axum::Router;

use crate::core::state::AppState;

/// Browser-facing authoring pages, mounted under `/teacher`.
pub(crate) fn pages_router() -> Router<AppState> {
    Router::new().route("/create-assessment", post(handlers::create_assessment))
}

/// JSON reads over the shared question table. The per-classroom summary
/// listing lives on the classrooms sub-router.
pub(crate) fn api_router() -> Router<AppState> {
    Router::new()
        .route("/assessments/:kind/:assessment_id/questions", get(handlers::list_questions))
}
