//! Task Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// Task Id
pub type TaskId = TypedId<Task>;

/// Task Model
///
/// `id` and `created_at` are fixed once the task exists; [`Task::update`] is
/// the only way to change anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
}

impl Task {
    /// Rebuilds a task from stored state.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: String,
        description: String,
        created_at: Timestamp,
        updated_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created_at,
            updated_at,
        }
    }

    /// Replaces title and description and stamps `updated_at` with now.
    pub fn update(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.title = title.into();
        self.description = description.into();
        self.updated_at = Some(Timestamp::now());
    }

    /// Storage-assigned id.
    pub fn id(&self) -> TaskId {
        self.id
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

    /// When the task was last updated, if ever.
    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }
}
