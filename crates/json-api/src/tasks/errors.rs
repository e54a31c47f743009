//! Task Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::tasks::TasksServiceError;

pub(crate) fn into_status_error(error: TasksServiceError) -> StatusError {
    match error {
        TasksServiceError::NotFound => StatusError::not_found(),
        TasksServiceError::Sql(source) => {
            error!("task storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            into_status_error(TasksServiceError::NotFound).code,
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn storage_error_maps_to_500() {
        assert_eq!(
            into_status_error(TasksServiceError::Sql(sqlx::Error::PoolTimedOut)).code,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
