//! Tasks service errors.

use sqlx::Error;
use thiserror::Error;

/// Task service error variants.
#[derive(Debug, Error)]
pub enum TasksServiceError {
    /// Task was not found.
    #[error("task not found")]
    NotFound,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for TasksServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
