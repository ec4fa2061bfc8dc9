use serde::{Deserialize, Serialize};
use sqlx::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "userrole", rename_all = "lowercase")]
pub(crate) enum UserRole {
    Student,
    Teacher,
}

/// Discriminator for the three disjoint assessment parent tables.
///
/// Questions from all three tables live in one shared table, so every
/// question row carries this kind next to the parent id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "assessmentkind", rename_all = "snake_case")]
pub(crate) enum AssessmentKind {
    Quiz,
    Test,
    QAssignment,
}

impl AssessmentKind {
    /// Exact enumeration over the accepted type tags. Anything else is
    /// rejected; there is deliberately no default fallback.
    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "quiz" => Some(AssessmentKind::Quiz),
            "test" => Some(AssessmentKind::Test),
            "q_assignment" => Some(AssessmentKind::QAssignment),
            _ => None,
        }
    }

    pub(crate) fn as_tag(self) -> &'static str {
        match self {
            AssessmentKind::Quiz => "quiz",
            AssessmentKind::Test => "test",
            AssessmentKind::QAssignment => "q_assignment",
        }
    }
}
