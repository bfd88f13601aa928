//! Service layer coordinating repositories and the listing pipeline.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod main;

#[derive(Debug, Error)]
/// Errors surfaced to the HTTP layer.
pub enum ServiceError {
    /// Request parameters were rejected; safe to show to the caller.
    #[error("{0}")]
    Validation(String),

    /// Record source failure; details are logged, never returned.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
