use sqlx::PgPool;

use crate::db::models::Topic;

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>(
        "SELECT id, title, description, video_url, position, created_at
         FROM topics
         ORDER BY position ASC, created_at ASC",
    )
    .fetch_all(pool)
    .await
}
