//! Task request bodies.

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extensions::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum TaskRequestError {
    #[error("title is required")]
    MissingTitle,
}

/// Task Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct TaskRequest {
    /// Task title; surrounding whitespace is ignored
    pub title: String,

    /// Task description; surrounding whitespace is ignored
    pub description: String,
}

impl TaskRequest {
    fn validated(self) -> Result<Self, TaskRequestError> {
        let title = self.title.trim();

        if title.is_empty() {
            return Err(TaskRequestError::MissingTitle);
        }

        Ok(Self {
            title: title.to_string(),
            description: self.description.trim().to_string(),
        })
    }

    /// Trimmed `(title, description)`, or a 400 when the title is blank.
    pub(crate) fn into_fields(self) -> Result<(String, String), StatusError> {
        let request = self.validated().or_400()?;

        Ok((request.title, request.description))
    }
}
