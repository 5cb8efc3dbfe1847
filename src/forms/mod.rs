//! Request parameter definitions backing the member routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod members;

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("page size {requested} exceeds the maximum of {max}")]
    PageSizeTooLarge { requested: usize, max: usize },

    #[error("{0}")]
    TypeConstraint(#[from] TypeConstraintError),
}
