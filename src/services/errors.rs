use thiserror::Error;

use crate::domain::nested_set::NestedSetViolation;
use crate::repository::RepositoryError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The storage layer failed; the underlying error is kept as is.
    #[error(transparent)]
    Repository(RepositoryError),
    /// A value did not satisfy a domain constraint.
    #[error("invalid data: {0}")]
    TypeConstraint(String),
    /// Submitted request data failed validation.
    #[error("{0}")]
    Form(String),
    /// Stored intervals no longer form a nested forest.
    #[error("category tree is corrupt: {0}")]
    CorruptTree(#[from] NestedSetViolation),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound(_) => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
