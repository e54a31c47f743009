//! Test context for service-level integration tests.

use crate::domain::tasks::PgTasksService;

use super::db::TestDb;

pub(crate) struct TestContext {
    /// Held so the per-test database outlives the services using it.
    _db: TestDb,
    pub(crate) tasks: PgTasksService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let db = TestDb::new().await;

        Self {
            tasks: PgTasksService::new(db.pool().clone()),
            _db: db,
        }
    }
}
