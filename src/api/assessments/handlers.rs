use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use time::macros::format_description;
use time::Date;
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::flash::Flash;
use crate::api::guards::CurrentTeacher;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::schemas::assessment::{
    AssessmentForm, AssessmentSummaryResponse, QuestionDraft, QuestionResponse,
};
use crate::services::assessments::{materialize_questions, resolve_target};

const LOGIN_PATH: &str = "/login";
const FORM_PATH: &str = "/teacher/create-assessment";
const DASHBOARD_PATH: &str = "/teacher/dashboard";

/// The authoring submission: gate, resolve the type tag, create the parent
/// row, then materialize the questions. Everything up to and including the
/// parent insert is fatal for the whole request; after that, questions are
/// best-effort and rows already written stay written.
pub(in crate::api::assessments) async fn create_assessment(
    State(state): State<AppState>,
    teacher: Result<CurrentTeacher, ApiError>,
    payload: Result<Form<AssessmentForm>, FormRejection>,
) -> Response {
    let Ok(CurrentTeacher(teacher)) = teacher else {
        return Flash::error("Please log in as a teacher to continue").redirect(LOGIN_PATH);
    };

    let form = match payload {
        Ok(Form(form)) => form,
        Err(err) => {
            tracing::warn!(error = %err, "rejected unreadable assessment form");
            return Flash::error("Could not read the submitted form").redirect(FORM_PATH);
        }
    };

    if let Err(err) = form.validate() {
        return Flash::error(err.to_string()).redirect(FORM_PATH);
    }

    let Some(target) = resolve_target(&form.assessment_type) else {
        tracing::warn!(tag = %form.assessment_type, "rejected unknown assessment type");
        return Flash::error("Unknown assessment type").redirect(FORM_PATH);
    };

    let drafts: Vec<QuestionDraft> = if form.questions.trim().is_empty() {
        Vec::new()
    } else {
        match serde_json::from_str(&form.questions) {
            Ok(drafts) => drafts,
            Err(err) => {
                tracing::warn!(error = %err, "rejected unreadable question payload");
                return Flash::error("Could not read the submitted questions").redirect(FORM_PATH);
            }
        }
    };

    // A due date submitted with quiz/test is ignored, not rejected.
    let due_date = if target.has_due_date {
        match parse_due_date(form.due_date.as_deref()) {
            Ok(value) => value,
            Err(_) => return Flash::error("Invalid due date").redirect(FORM_PATH),
        }
    } else {
        None
    };

    let assessment_id = Uuid::new_v4().to_string();
    let created = repositories::assessments::create_parent(
        state.db(),
        target.kind,
        repositories::assessments::CreateParent {
            id: &assessment_id,
            classroom_id: &form.classroom_id,
            title: &form.title,
            description: form.description.as_deref(),
            due_date,
            created_at: primitive_now_utc(),
        },
    )
    .await;

    if let Err(err) = created {
        tracing::error!(error = %err, table = target.table, "Failed to create assessment");
        return Flash::error("Could not create the assessment").redirect(FORM_PATH);
    }

    let outcome =
        match materialize_questions(state.db(), &assessment_id, target.kind, drafts).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, %assessment_id, "Failed while saving questions");
                return Flash::error("Could not save the assessment questions")
                    .redirect(FORM_PATH);
            }
        };

    tracing::info!(
        teacher_id = %teacher.id,
        %assessment_id,
        kind = target.kind.as_tag(),
        persisted = outcome.persisted.len(),
        skipped = outcome.skipped.len(),
        "assessment created"
    );

    let message = if outcome.skipped.is_empty() {
        format!(
            "Assessment '{}' created with {} question(s)",
            form.title,
            outcome.persisted.len()
        )
    } else {
        format!(
            "Assessment '{}' created with {} question(s); {} skipped",
            form.title,
            outcome.persisted.len(),
            outcome.skipped.len()
        )
    };

    Flash::success(message).redirect(DASHBOARD_PATH)
}

fn parse_due_date(raw: Option<&str>) -> Result<Option<Date>, time::error::Parse> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => {
            Date::parse(value, &format_description!("[year]-[month]-[day]")).map(Some)
        }
        None => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentListQuery {
    pub(crate) kind: String,
}

pub(crate) async fn list_assessments(
    Path(classroom_id): Path<String>,
    Query(params): Query<AssessmentListQuery>,
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
) -> Result<Json<Vec<AssessmentSummaryResponse>>, ApiError> {
    let Some(target) = resolve_target(&params.kind) else {
        return Err(ApiError::BadRequest(format!("Unknown assessment type: {}", params.kind)));
    };

    let summaries =
        repositories::assessments::list_by_classroom(state.db(), target.kind, &classroom_id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to list assessments"))?;

    Ok(Json(
        summaries
            .into_iter()
            .map(|summary| AssessmentSummaryResponse::from_db(target.kind, summary))
            .collect(),
    ))
}

pub(in crate::api::assessments) async fn list_questions(
    Path((kind_tag, assessment_id)): Path<(String, String)>,
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let Some(target) = resolve_target(&kind_tag) else {
        return Err(ApiError::BadRequest(format!("Unknown assessment type: {kind_tag}")));
    };

    let questions =
        repositories::questions::list_by_assessment(state.db(), target.kind, &assessment_id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to list questions"))?;

    Ok(Json(questions.into_iter().map(QuestionResponse::from_db).collect()))
}

#[cfg(test)]
mod unit_tests {
    use super::parse_due_date;
    use time::{Date, Month};

    #[test]
    fn parse_due_date_accepts_iso_dates() {
        let parsed = parse_due_date(Some("2026-09-01")).expect("date");
        assert_eq!(parsed, Some(Date::from_calendar_date(2026, Month::September, 1).unwrap()));
    }

    #[test]
    fn parse_due_date_treats_blank_as_absent() {
        assert_eq!(parse_due_date(None).expect("none"), None);
        assert_eq!(parse_due_date(Some("  ")).expect("blank"), None);
    }

    #[test]
    fn parse_due_date_rejects_garbage() {
        assert!(parse_due_date(Some("01/09/2026")).is_err());
        assert!(parse_due_date(Some("soon")).is_err());
    }
}
