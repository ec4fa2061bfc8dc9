pub(crate) mod assessments;
pub(crate) mod auth;
pub(crate) mod classrooms;
pub(crate) mod errors;
pub(crate) mod flash;
pub(crate) mod guards;
pub(crate) mod handlers;
pub(crate) mod router;
pub(crate) mod topics;
pub(crate) mod users;
pub(crate) mod validation;
