use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::ApiError;
use crate::api::guards::CurrentUser;
use crate::core::state::AppState;
use crate::db::models::Topic;
use crate::repositories;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_topics))
}

async fn list_topics(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Topic>>, ApiError> {
    let topics = repositories::topics::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list topics"))?;

    Ok(Json(topics))
}
