//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::{
        products::{
            CatalogError, CatalogProductsService, ProductsService,
            catalog::{CatalogConfig, HttpCatalogTransport},
        },
        tasks::{PgTasksService, TasksService},
    },
};

/// Failures while wiring the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database pool could not connect.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// The catalog HTTP client could not be built.
    #[error("failed to build catalog client")]
    Catalog(#[source] CatalogError),
}

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Catalog-backed product operations.
    pub products: Arc<dyn ProductsService>,

    /// Stored task operations.
    pub tasks: Arc<dyn TasksService>,
}

impl AppContext {
    /// Build application context from a database URL and catalog settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails or the
    /// catalog HTTP client cannot be built.
    pub async fn from_config(
        database_url: &str,
        catalog: CatalogConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url)
            .await
            .map_err(AppInitError::Database)?;

        let transport = HttpCatalogTransport::new(catalog).map_err(AppInitError::Catalog)?;

        Ok(Self {
            products: Arc::new(CatalogProductsService::new(Arc::new(transport))),
            tasks: Arc::new(PgTasksService::new(pool)),
        })
    }
}
