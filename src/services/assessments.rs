//! Assessment authoring: type-tag resolution and question materialization.
//!
//! The authoring flow runs in two steps. `resolve_target` maps the submitted
//! type tag onto one of the three parent tables; an unknown tag is fatal for
//! the whole request. `materialize_questions` then walks the submitted
//! questions in order, turning each one's selected answer index into the
//! literal option text and persisting it against the new parent. A question
//! whose index does not resolve to non-empty text is dropped and logged,
//! never written, and never aborts the rest of the submission.

use std::collections::BTreeMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::time::primitive_now_utc;
use crate::db::types::AssessmentKind;
use crate::repositories;
use crate::schemas::assessment::QuestionDraft;

/// Where a resolved assessment kind is stored and which fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StorageTarget {
    pub(crate) kind: AssessmentKind,
    pub(crate) table: &'static str,
    pub(crate) has_due_date: bool,
}

/// Maps a caller-supplied type tag to its storage target. Unknown tags get
/// `None`; the caller must treat that as a fatal input error before any row
/// is written.
pub(crate) fn resolve_target(tag: &str) -> Option<StorageTarget> {
    let kind = AssessmentKind::from_tag(tag)?;
    Some(match kind {
        AssessmentKind::Quiz => {
            StorageTarget { kind, table: "quizzes", has_due_date: false }
        }
        AssessmentKind::Test => StorageTarget { kind, table: "tests", has_due_date: false },
        AssessmentKind::QAssignment => {
            StorageTarget { kind, table: "q_assignments", has_due_date: true }
        }
    })
}

/// Resolves the selected answer index into the literal option text.
///
/// Returns `None` when the index is absent, the key is missing from the
/// options mapping, or the option text is empty; all three mean the
/// question has no resolvable answer.
pub(crate) fn resolve_correct_answer(
    options: &BTreeMap<String, String>,
    correct: Option<&str>,
) -> Option<String> {
    let key = correct?;
    options.get(key).filter(|text| !text.is_empty()).cloned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AcceptedQuestion {
    pub(crate) position: i32,
    pub(crate) text: String,
    pub(crate) options: BTreeMap<String, String>,
    pub(crate) correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SkippedQuestion {
    pub(crate) position: i32,
    pub(crate) text: String,
}

#[derive(Debug, Default)]
pub(crate) struct QuestionPlan {
    pub(crate) accepted: Vec<AcceptedQuestion>,
    pub(crate) skipped: Vec<SkippedQuestion>,
}

/// Partitions the submitted questions, in submission order, into those with
/// a resolvable answer and those to drop. `position` keeps the original
/// submission index either way, so persisted rows keep the teacher's order.
pub(crate) fn plan_questions(drafts: Vec<QuestionDraft>) -> QuestionPlan {
    let mut plan = QuestionPlan::default();

    for (index, draft) in drafts.into_iter().enumerate() {
        let position = index as i32;
        match resolve_correct_answer(&draft.options, draft.correct.as_deref()) {
            Some(correct_answer) => plan.accepted.push(AcceptedQuestion {
                position,
                text: draft.text,
                options: draft.options,
                correct_answer,
            }),
            None => plan.skipped.push(SkippedQuestion { position, text: draft.text }),
        }
    }

    plan
}

#[derive(Debug)]
pub(crate) struct PersistedQuestion {
    pub(crate) id: String,
    pub(crate) position: i32,
}

#[derive(Debug)]
pub(crate) struct MaterializeOutcome {
    pub(crate) persisted: Vec<PersistedQuestion>,
    pub(crate) skipped: Vec<SkippedQuestion>,
}

/// Persists the resolvable questions one by one against the new parent.
///
/// Runs strictly sequentially so the skip log reflects submission order. A
/// store error aborts the remaining inserts and bubbles up as one aggregate
/// failure; rows already written stay written, since the parent and its questions
/// are deliberately not one transaction.
pub(crate) async fn materialize_questions(
    pool: &PgPool,
    assessment_id: &str,
    kind: AssessmentKind,
    drafts: Vec<QuestionDraft>,
) -> Result<MaterializeOutcome, sqlx::Error> {
    let plan = plan_questions(drafts);
    let now = primitive_now_utc();

    for skipped in &plan.skipped {
        tracing::warn!(
            assessment_id,
            kind = kind.as_tag(),
            position = skipped.position,
            question = %skipped.text,
            "skipping question without a resolvable answer"
        );
    }

    let mut persisted = Vec::with_capacity(plan.accepted.len());
    for question in plan.accepted {
        let question_id = Uuid::new_v4().to_string();

        repositories::questions::create(
            pool,
            repositories::questions::CreateQuestion {
                id: &question_id,
                assessment_id,
                assessment_kind: kind,
                position: question.position,
                question_text: &question.text,
                options: &question.options,
                correct_answer: &question.correct_answer,
                created_at: now,
            },
        )
        .await?;

        let persisted_question =
            PersistedQuestion { id: question_id, position: question.position };
        tracing::debug!(
            assessment_id,
            question_id = %persisted_question.id,
            position = persisted_question.position,
            "question persisted"
        );
        persisted.push(persisted_question);
    }

    Ok(MaterializeOutcome { persisted, skipped: plan.skipped })
}
