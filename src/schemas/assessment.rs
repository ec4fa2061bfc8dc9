use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::{AssessmentSummary, Question};
use crate::db::types::AssessmentKind;

/// The authoring form as the question-builder page posts it. `questions`
/// arrives as one JSON-encoded hidden field holding the ordered question
/// array; everything else is plain form fields.
#[derive(Debug, Deserialize, Validate)]
pub(crate) struct AssessmentForm {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) classroom_id: String,
    pub(crate) assessment_type: String,
    #[serde(default)]
    pub(crate) due_date: Option<String>,
    #[serde(default)]
    pub(crate) questions: String,
}

/// One raw question as submitted. A missing `options` object is treated as
/// an empty mapping and a missing `correct` as no selection; both make the
/// question unresolvable and cause it to be skipped, not rejected.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuestionDraft {
    pub(crate) text: String,
    #[serde(default)]
    pub(crate) options: BTreeMap<String, String>,
    #[serde(default)]
    pub(crate) correct: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentSummaryResponse {
    pub(crate) id: String,
    pub(crate) kind: AssessmentKind,
    pub(crate) classroom_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) due_date: Option<String>,
    pub(crate) created_at: String,
}

impl AssessmentSummaryResponse {
    pub(crate) fn from_db(kind: AssessmentKind, summary: AssessmentSummary) -> Self {
        Self {
            id: summary.id,
            kind,
            classroom_id: summary.classroom_id,
            title: summary.title,
            description: summary.description,
            due_date: summary.due_date.map(|date| date.to_string()),
            created_at: format_primitive(summary.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionResponse {
    pub(crate) id: String,
    pub(crate) assessment_id: String,
    pub(crate) assessment_kind: AssessmentKind,
    pub(crate) position: i32,
    pub(crate) text: String,
    pub(crate) options: BTreeMap<String, String>,
    pub(crate) correct_answer: String,
}

impl QuestionResponse {
    pub(crate) fn from_db(question: Question) -> Self {
        Self {
            id: question.id,
            assessment_id: question.assessment_id,
            assessment_kind: question.assessment_kind,
            position: question.position,
            text: question.question_text,
            options: question.options.0,
            correct_answer: question.correct_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_draft_defaults_absent_fields() {
        let draft: QuestionDraft = serde_json::from_str(r#"{"text": "lonely"}"#).unwrap();
        assert_eq!(draft.text, "lonely");
        assert!(draft.options.is_empty());
        assert!(draft.correct.is_none());
    }

    #[test]
    fn question_draft_preserves_option_keys() {
        let draft: QuestionDraft = serde_json::from_str(
            r#"{"text": "capital?", "options": {"0": "London", "1": "Paris"}, "correct": "1"}"#,
        )
        .unwrap();
        assert_eq!(draft.options.get("1").map(String::as_str), Some("Paris"));
        assert_eq!(draft.correct.as_deref(), Some("1"));
    }

    #[test]
    fn question_array_keeps_submission_order() {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(
            r#"[{"text": "b"}, {"text": "a"}, {"text": "c"}]"#,
        )
        .unwrap();
        let texts: Vec<&str> = drafts.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }
}
