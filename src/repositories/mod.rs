pub(crate) mod assessments;
pub(crate) mod classrooms;
pub(crate) mod questions;
pub(crate) mod topics;
pub(crate) mod users;
