use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentTeacher;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::models::Classroom;
use crate::repositories;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ClassroomCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub(crate) name: String,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classrooms).post(create_classroom))
        .route(
            "/:classroom_id/assessments",
            get(crate::api::assessments::handlers::list_assessments),
        )
}

async fn list_classrooms(
    CurrentTeacher(teacher): CurrentTeacher,
    State(state): State<AppState>,
) -> Result<Json<Vec<Classroom>>, ApiError> {
    let classrooms = repositories::classrooms::list_by_teacher(state.db(), &teacher.id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list classrooms"))?;

    Ok(Json(classrooms))
}

async fn create_classroom(
    CurrentTeacher(teacher): CurrentTeacher,
    State(state): State<AppState>,
    Json(payload): Json<ClassroomCreate>,
) -> Result<(StatusCode, Json<Classroom>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let classroom = repositories::classrooms::create(
        state.db(),
        repositories::classrooms::CreateClassroom {
            id: &Uuid::new_v4().to_string(),
            name: &payload.name,
            teacher_id: &teacher.id,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create classroom"))?;

    Ok((StatusCode::CREATED, Json(classroom)))
}
