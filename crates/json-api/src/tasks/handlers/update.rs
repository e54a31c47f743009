//! Update Task Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use storefront_app::domain::tasks::models::TaskId;

use crate::{
    extensions::*,
    tasks::{errors::into_status_error, requests::TaskRequest, responses::TaskResponse},
};

/// Task Update Handler
///
/// Loads the task, applies the new title and description, then saves it.
#[endpoint(
    tags("tasks"),
    summary = "Update Task",
    responses(
        (status_code = StatusCode::OK, description = "Task updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Task not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "tasks.update",
    skip(id, json, depot),
    fields(task_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    json: JsonBody<TaskRequest>,
    depot: &mut Depot,
) -> Result<Json<TaskResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = TaskId::new(id.into_inner());

    tracing::Span::current().record("task_id", tracing::field::display(id));

    let (title, description) = json.into_inner().into_fields()?;

    let mut task = state
        .app
        .tasks
        .get_task(id)
        .await
        .map_err(into_status_error)?;

    task.update(title, description);

    state
        .app
        .tasks
        .save_task(&task)
        .await
        .map_err(into_status_error)?;

    tracing::info!(task_id = %id, "updated task");

    Ok(Json(task.into()))
}
