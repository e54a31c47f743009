//! Delete Task Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::tasks::models::TaskId;

use crate::{extensions::*, tasks::errors::into_status_error};

/// Delete Task Handler
#[endpoint(
    tags("tasks"),
    summary = "Delete Task",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Task deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Task not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "tasks.delete",
    skip(id, depot),
    fields(task_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let id = TaskId::new(id.into_inner());

    tracing::Span::current().record("task_id", tracing::field::display(id));

    state
        .app
        .tasks
        .delete_task(id)
        .await
        .map_err(into_status_error)?;

    tracing::info!(task_id = %id, "deleted task");

    Ok(StatusCode::NO_CONTENT)
}
