//! Tasks Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::tasks::{
    commands::AddTaskCommand,
    models::{Task, TaskId},
};

const LIST_TASKS_SQL: &str = include_str!("sql/list_tasks.sql");
const GET_TASK_SQL: &str = include_str!("sql/get_task.sql");
const ADD_TASK_SQL: &str = include_str!("sql/add_task.sql");
const SAVE_TASK_SQL: &str = include_str!("sql/save_task.sql");
const DELETE_TASK_SQL: &str = include_str!("sql/delete_task.sql");

/// PostgreSQL-backed tasks repository.
#[derive(Debug, Clone)]
pub(crate) struct PgTasksRepository {
    pool: PgPool,
}

impl PgTasksRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn list(&self) -> Result<Vec<Task>, sqlx::Error> {
        query_as::<Postgres, Task>(LIST_TASKS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn get_by_id(&self, id: i64) -> Result<Task, sqlx::Error> {
        query_as::<Postgres, Task>(GET_TASK_SQL)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn add(&self, command: &AddTaskCommand) -> Result<Task, sqlx::Error> {
        query_as::<Postgres, Task>(ADD_TASK_SQL)
            .bind(command.title())
            .bind(command.description())
            .bind(SqlxTimestamp::from(command.created_at()))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn save(&self, id: i64, task: &Task) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SAVE_TASK_SQL)
            .bind(id)
            .bind(task.title())
            .bind(task.description())
            .bind(task.updated_at().map(SqlxTimestamp::from))
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_TASK_SQL)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Task {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let id: i64 = row.try_get("id")?;

        let id = u64::try_from(id).map_err(|error| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: Box::new(error),
        })?;

        Ok(Self::new(
            TaskId::new(id),
            row.try_get("title")?,
            row.try_get("description")?,
            row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            row.try_get::<Option<SqlxTimestamp>, _>("updated_at")?
                .map(SqlxTimestamp::to_jiff),
        ))
    }
}
