//! Create Task Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use storefront_app::domain::tasks::commands::AddTaskCommand;

use crate::{
    extensions::*,
    tasks::{errors::into_status_error, requests::TaskRequest, responses::TaskResponse},
};

/// Create Task Handler
#[endpoint(
    tags("tasks"),
    summary = "Create Task",
    responses(
        (status_code = StatusCode::CREATED, description = "Task created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "tasks.create",
    skip(json, depot, res),
    fields(task_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<TaskRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TaskResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let (title, description) = json.into_inner().into_fields()?;

    let task = state
        .app
        .tasks
        .add_task(AddTaskCommand::new(title, description))
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("task_id", tracing::field::display(task.id()));

    res.add_header(LOCATION, format!("/tasks/{}", task.id()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(task_id = %task.id(), "created task");

    Ok(Json(task.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::tasks::{
        MockTasksService, TasksServiceError,
        models::{Task, TaskId},
    };

    use crate::test_helpers::{strict_tasks_mock, tasks_service};

    use super::*;

    fn make_service(tasks: MockTasksService) -> Service {
        tasks_service(tasks, Router::with_path("tasks").post(handler))
    }

    #[tokio::test]
    async fn test_create_task_returns_201_with_null_updated_at() -> TestResult {
        let mut tasks = MockTasksService::new();

        tasks
            .expect_add_task()
            .once()
            .withf(|command| command.title() == "T" && command.description() == "D")
            .return_once(|command| {
                Ok(Task::new(
                    TaskId::new(1),
                    command.title().to_string(),
                    command.description().to_string(),
                    command.created_at(),
                    None,
                ))
            });

        let mut res = TestClient::post("http://example.com/tasks")
            .json(&json!({ "title": "T", "description": "D" }))
            .send(&make_service(tasks))
            .await;

        let location = res
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location.as_deref(), Some("/tasks/1"));
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "T");
        assert_eq!(body["description"], "D");
        assert!(body["createdAt"].is_string(), "expected createdAt, got {body}");
        assert!(body["updatedAt"].is_null(), "expected null updatedAt, got {body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_task_trims_fields() -> TestResult {
        let mut tasks = MockTasksService::new();

        tasks
            .expect_add_task()
            .once()
            .withf(|command| command.title() == "T" && command.description() == "D")
            .return_once(|command| {
                Ok(Task::new(
                    TaskId::new(2),
                    command.title().to_string(),
                    command.description().to_string(),
                    command.created_at(),
                    None,
                ))
            });

        let res = TestClient::post("http://example.com/tasks")
            .json(&json!({ "title": "  T ", "description": " D  " }))
            .send(&make_service(tasks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_task_blank_title_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/tasks")
            .json(&json!({ "title": "  ", "description": "D" }))
            .send(&make_service(strict_tasks_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_task_storage_failure_returns_500() -> TestResult {
        let mut tasks = MockTasksService::new();

        tasks
            .expect_add_task()
            .once()
            .return_once(|_| Err(TasksServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::post("http://example.com/tasks")
            .json(&json!({ "title": "T" }))
            .send(&make_service(tasks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
