use sqlx::PgPool;

use crate::db::models::Classroom;

const COLUMNS: &str = "id, name, teacher_id, created_at";

pub(crate) struct CreateClassroom<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub teacher_id: &'a str,
    pub created_at: time::PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateClassroom<'_>,
) -> Result<Classroom, sqlx::Error> {
    sqlx::query_as::<_, Classroom>(&format!(
        "INSERT INTO classrooms (id, name, teacher_id, created_at)
         VALUES ($1,$2,$3,$4)
         RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.name)
    .bind(params.teacher_id)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn list_by_teacher(
    pool: &PgPool,
    teacher_id: &str,
) -> Result<Vec<Classroom>, sqlx::Error> {
    sqlx::query_as::<_, Classroom>(&format!(
        "SELECT {COLUMNS} FROM classrooms WHERE teacher_id = $1 ORDER BY created_at DESC",
    ))
    .bind(teacher_id)
    .fetch_all(pool)
    .await
}
