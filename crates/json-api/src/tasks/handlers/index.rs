//! Task Index Handler

use salvo::prelude::*;

use crate::{extensions::*, tasks::errors::into_status_error, tasks::responses::TaskResponse};

/// Task Index Handler
///
/// Returns all stored tasks ordered by id.
#[endpoint(tags("tasks"), summary = "List Tasks")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<TaskResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let tasks = state
        .app
        .tasks
        .list_tasks()
        .await
        .map_err(into_status_error)?;

    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::tasks::{MockTasksService, TasksServiceError};

    use crate::test_helpers::{make_task, tasks_service};

    use super::*;

    fn make_service(tasks: MockTasksService) -> Service {
        tasks_service(tasks, Router::with_path("tasks").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_tasks() -> TestResult {
        let mut tasks = MockTasksService::new();

        tasks
            .expect_list_tasks()
            .once()
            .return_once(|| Ok(vec![make_task(1), make_task(2)]));

        let mut res = TestClient::get("http://example.com/tasks")
            .send(&make_service(tasks))
            .await;

        let body: Vec<TaskResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            vec![TaskResponse::from(make_task(1)), TaskResponse::from(make_task(2))]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_empty_500() -> TestResult {
        let mut tasks = MockTasksService::new();

        tasks
            .expect_list_tasks()
            .once()
            .return_once(|| Err(TasksServiceError::Sql(sqlx::Error::PoolClosed)));

        let mut res = TestClient::get("http://example.com/tasks")
            .send(&make_service(tasks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(res.take_string().await?.is_empty());

        Ok(())
    }
}
