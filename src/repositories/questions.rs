use std::collections::BTreeMap;

use sqlx::types::Json;
use sqlx::PgPool;

use crate::db::models::Question;
use crate::db::types::AssessmentKind;

const COLUMNS: &str = "\
    id, assessment_id, assessment_kind, position, question_text, options, \
    correct_answer, created_at";

pub(crate) struct CreateQuestion<'a> {
    pub id: &'a str,
    pub assessment_id: &'a str,
    pub assessment_kind: AssessmentKind,
    pub position: i32,
    pub question_text: &'a str,
    pub options: &'a BTreeMap<String, String>,
    pub correct_answer: &'a str,
    pub created_at: time::PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateQuestion<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO questions (
            id, assessment_id, assessment_kind, position, question_text,
            options, correct_answer, created_at
        ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8)",
    )
    .bind(params.id)
    .bind(params.assessment_id)
    .bind(params.assessment_kind)
    .bind(params.position)
    .bind(params.question_text)
    .bind(Json(params.options))
    .bind(params.correct_answer)
    .bind(params.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub(crate) async fn list_by_assessment(
    pool: &PgPool,
    kind: AssessmentKind,
    assessment_id: &str,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM questions
         WHERE assessment_kind = $1 AND assessment_id = $2
         ORDER BY position ASC",
    ))
    .bind(kind)
    .bind(assessment_id)
    .fetch_all(pool)
    .await
}
