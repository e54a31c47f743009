//! Catalog Config

use std::time::Duration;

use clap::Args;

use storefront_app::domain::products::catalog::CatalogConfig;

/// Upstream product catalog settings.
#[derive(Debug, Args)]
pub struct CatalogSettings {
    /// Catalog base URL
    #[arg(long, env = "CATALOG_BASE_URL", default_value = "https://fakestoreapi.com")]
    pub catalog_base_url: String,

    /// Timeout applied to each catalog call, in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECONDS", default_value_t = 60_u64)]
    pub catalog_timeout_seconds: u64,
}

impl CatalogSettings {
    #[must_use]
    pub fn into_catalog_config(self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog_base_url,
            timeout: Duration::from_secs(self.catalog_timeout_seconds),
        }
    }
}
