use thiserror::Error;

use crate::domain::value_objects::RecordIdError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    MalformedIdentifier(#[from] RecordIdError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
