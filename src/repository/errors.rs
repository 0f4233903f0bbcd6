use diesel::r2d2::PoolError;
use thiserror::Error;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A record the operation depends on does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The database rejected a statement or the transaction failed.
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    /// No connection could be obtained from the pool.
    #[error("connection pool error: {0}")]
    ConnectionError(#[from] PoolError),
    /// A stored row could not be converted into a domain value.
    #[error("validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
