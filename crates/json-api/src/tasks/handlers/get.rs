//! Get Task Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::tasks::models::TaskId;

use crate::{extensions::*, tasks::errors::into_status_error, tasks::responses::TaskResponse};

/// Get Task Handler
#[endpoint(
    tags("tasks"),
    summary = "Get Task",
    responses(
        (status_code = StatusCode::OK, description = "Task found"),
        (status_code = StatusCode::NOT_FOUND, description = "Task not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<TaskResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let task = state
        .app
        .tasks
        .get_task(TaskId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(task.into()))
}
