use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::{Date, PrimitiveDateTime};

use crate::db::types::{AssessmentKind, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) email: String,
    pub(crate) hashed_password: String,
    pub(crate) full_name: String,
    pub(crate) bio: Option<String>,
    pub(crate) role: UserRole,
    pub(crate) experience_points: i32,
    pub(crate) is_active: bool,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Classroom {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) teacher_id: String,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Topic {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) video_url: Option<String>,
    pub(crate) position: i32,
    pub(crate) created_at: PrimitiveDateTime,
}

/// One row of whichever parent table the kind resolved to. `due_date` is
/// only ever non-null for rows read from `q_assignments`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct AssessmentSummary {
    pub(crate) id: String,
    pub(crate) classroom_id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) due_date: Option<Date>,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Question {
    pub(crate) id: String,
    pub(crate) assessment_id: String,
    pub(crate) assessment_kind: AssessmentKind,
    pub(crate) position: i32,
    pub(crate) question_text: String,
    pub(crate) options: Json<BTreeMap<String, String>>,
    pub(crate) correct_answer: String,
    pub(crate) created_at: PrimitiveDateTime,
}
