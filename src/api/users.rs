use axum::{
    extract::{Query, State},
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentUser;
use crate::api::validation;
use crate::core::security;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::schemas::user::{LeaderboardEntry, ProfileUpdate, UserResponse};

const DEFAULT_LEADERBOARD_LIMIT: i64 = 50;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/me", patch(update_me)).route("/leaderboard", get(leaderboard))
}

/// Applies the profile update, then re-reads the row and returns the fresh
/// value; callers replace whatever identity copy they held with this one.
async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<UserResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let hashed_password = match payload.password.as_deref() {
        Some(password) => {
            validation::validate_password_len(password)?;
            Some(
                security::hash_password(password)
                    .map_err(|e| ApiError::internal(e, "Failed to hash password"))?,
            )
        }
        None => None,
    };

    repositories::users::update_profile(
        state.db(),
        &user.id,
        repositories::users::UpdateProfile {
            full_name: payload.full_name,
            bio: payload.bio,
            hashed_password,
            updated_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update profile"))?;

    let refreshed = repositories::users::fetch_one_by_id(state.db(), &user.id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to reload user"))?;

    Ok(Json(UserResponse::from_db(refreshed)))
}

#[derive(Debug, Deserialize)]
struct LeaderboardQuery {
    #[serde(default = "default_leaderboard_limit")]
    limit: i64,
}

fn default_leaderboard_limit() -> i64 {
    DEFAULT_LEADERBOARD_LIMIT
}

async fn leaderboard(
    Query(params): Query<LeaderboardQuery>,
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let rows = repositories::users::leaderboard(state.db(), params.limit)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load leaderboard"))?;

    let entries = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| LeaderboardEntry {
            rank: index + 1,
            user_id: row.id,
            full_name: row.full_name,
            experience_points: row.experience_points,
        })
        .collect();

    Ok(Json(entries))
}
