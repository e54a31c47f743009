//! Task response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::tasks::models::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskResponse {
    pub id: u64,

    pub title: String,

    pub description: String,

    /// RFC 3339 creation time
    pub created_at: String,

    /// RFC 3339 time of the last update, `null` until the task is first updated
    pub updated_at: Option<String>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().get(),
            title: task.title().to_string(),
            description: task.description().to_string(),
            created_at: task.created_at().to_string(),
            updated_at: task.updated_at().map(|at| at.to_string()),
        }
    }
}
