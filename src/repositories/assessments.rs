use sqlx::PgPool;
use time::Date;

use crate::db::models::AssessmentSummary;
use crate::db::types::AssessmentKind;

pub(crate) struct CreateParent<'a> {
    pub id: &'a str,
    pub classroom_id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub due_date: Option<Date>,
    pub created_at: time::PrimitiveDateTime,
}

/// Inserts one row into the parent table the kind resolved to and returns
/// the new assessment id. The statements are static per kind; the kind is
/// never interpolated into SQL.
pub(crate) async fn create_parent(
    pool: &PgPool,
    kind: AssessmentKind,
    params: CreateParent<'_>,
) -> Result<String, sqlx::Error> {
    match kind {
        AssessmentKind::Quiz => {
            sqlx::query_scalar::<_, String>(
                "INSERT INTO quizzes (id, classroom_id, title, description, created_at)
                 VALUES ($1,$2,$3,$4,$5)
                 RETURNING id",
            )
            .bind(params.id)
            .bind(params.classroom_id)
            .bind(params.title)
            .bind(params.description)
            .bind(params.created_at)
            .fetch_one(pool)
            .await
        }
        AssessmentKind::Test => {
            sqlx::query_scalar::<_, String>(
                "INSERT INTO tests (id, classroom_id, title, description, created_at)
                 VALUES ($1,$2,$3,$4,$5)
                 RETURNING id",
            )
            .bind(params.id)
            .bind(params.classroom_id)
            .bind(params.title)
            .bind(params.description)
            .bind(params.created_at)
            .fetch_one(pool)
            .await
        }
        AssessmentKind::QAssignment => {
            sqlx::query_scalar::<_, String>(
                "INSERT INTO q_assignments (id, classroom_id, title, description, due_date, created_at)
                 VALUES ($1,$2,$3,$4,$5,$6)
                 RETURNING id",
            )
            .bind(params.id)
            .bind(params.classroom_id)
            .bind(params.title)
            .bind(params.description)
            .bind(params.due_date)
            .bind(params.created_at)
            .fetch_one(pool)
            .await
        }
    }
}

pub(crate) async fn list_by_classroom(
    pool: &PgPool,
    kind: AssessmentKind,
    classroom_id: &str,
) -> Result<Vec<AssessmentSummary>, sqlx::Error> {
    let sql = match kind {
        AssessmentKind::Quiz => {
            "SELECT id, classroom_id, title, description, NULL::date AS due_date, created_at
             FROM quizzes WHERE classroom_id = $1 ORDER BY created_at DESC"
        }
        AssessmentKind::Test => {
            "SELECT id, classroom_id, title, description, NULL::date AS due_date, created_at
             FROM tests WHERE classroom_id = $1 ORDER BY created_at DESC"
        }
        AssessmentKind::QAssignment => {
            "SELECT id, classroom_id, title, description, due_date, created_at
             FROM q_assignments WHERE classroom_id = $1 ORDER BY created_at DESC"
        }
    };

    sqlx::query_as::<_, AssessmentSummary>(sql).bind(classroom_id).fetch_all(pool).await
}
