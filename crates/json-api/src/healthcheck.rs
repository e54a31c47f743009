//! Root liveness handler.

use salvo::prelude::*;

/// Liveness probe
///
/// Answers `204 No Content` while the server is accepting requests.
#[endpoint(
    tags("health"),
    summary = "Liveness probe",
    responses((status_code = StatusCode::NO_CONTENT, description = "Server is up")),
)]
pub(crate) async fn handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
