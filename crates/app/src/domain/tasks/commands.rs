//! Task Commands

use jiff::Timestamp;

/// Add Task Command
///
/// Carries no validation of its own; the creation time is captured when the
/// command is built, not when it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskCommand {
    title: String,
    description: String,
    created_at: Timestamp,
}

impl AddTaskCommand {
    /// Captures title and description, stamped with the current time.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: Timestamp::now(),
        }
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the task was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
