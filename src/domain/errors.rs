// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure raised by entities, value objects, or a repository contract.
/// HTTP status mapping happens at the presentation boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An entity or value-object invariant was violated.
    #[error("invalid value: {0}")]
    Validation(String),
    /// A uniqueness rule (username, email, live customer email) was broken.
    #[error("already exists: {0}")]
    Conflict(String),
    /// The referenced record does not exist or is not visible.
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Persistence(String),
}
