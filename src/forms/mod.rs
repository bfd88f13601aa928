//! Request parameter definitions backing the directory routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod advocates;

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}
