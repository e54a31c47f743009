//! Observability lifecycle.

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Marker for an initialised logging pipeline.
#[derive(Debug)]
pub(crate) struct Observability;

impl Observability {
    /// Apply request settings and install the global subscriber.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        logging::init_subscriber(config)?;

        Ok(Self)
    }
}
