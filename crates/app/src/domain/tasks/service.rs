//! Tasks service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::tasks::{
    commands::AddTaskCommand,
    errors::TasksServiceError,
    models::{Task, TaskId},
    repository::PgTasksRepository,
};

/// Tasks service backed by the `task` table.
#[derive(Debug, Clone)]
pub struct PgTasksService {
    repository: PgTasksRepository,
}

impl PgTasksService {
    /// Builds the service over a connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgTasksRepository::new(pool),
        }
    }
}

/// Ids past the `BIGSERIAL` range were never assigned.
fn storage_key(task: TaskId) -> Result<i64, TasksServiceError> {
    task.to_i64().ok().ok_or(TasksServiceError::NotFound)
}

#[async_trait]
impl TasksService for PgTasksService {
    async fn list_tasks(&self) -> Result<Vec<Task>, TasksServiceError> {
        self.repository.list().await.map_err(Into::into)
    }

    async fn get_task(&self, task: TaskId) -> Result<Task, TasksServiceError> {
        let id = storage_key(task)?;

        self.repository.get_by_id(id).await.map_err(Into::into)
    }

    async fn add_task(&self, command: AddTaskCommand) -> Result<Task, TasksServiceError> {
        self.repository.add(&command).await.map_err(Into::into)
    }

    async fn save_task(&self, task: &Task) -> Result<(), TasksServiceError> {
        let id = storage_key(task.id())?;

        let rows_affected = self.repository.save(id, task).await?;

        if rows_affected == 0 {
            return Err(TasksServiceError::NotFound);
        }

        Ok(())
    }

    async fn delete_task(&self, task: TaskId) -> Result<(), TasksServiceError> {
        let id = storage_key(task)?;

        let rows_affected = self.repository.delete(id).await?;

        if rows_affected == 0 {
            return Err(TasksServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Task persistence operations.
pub trait TasksService: Send + Sync {
    /// Lists every stored task.
    async fn list_tasks(&self) -> Result<Vec<Task>, TasksServiceError>;

    /// Retrieves a single task.
    async fn get_task(&self, task: TaskId) -> Result<Task, TasksServiceError>;

    /// Stores a new task and returns it with its assigned id.
    async fn add_task(&self, command: AddTaskCommand) -> Result<Task, TasksServiceError>;

    /// Persists title, description and `updated_at` of an existing task.
    async fn save_task(&self, task: &Task) -> Result<(), TasksServiceError>;

    /// Deletes a task.
    async fn delete_task(&self, task: TaskId) -> Result<(), TasksServiceError>;
}
