//! Shared handler state

use std::sync::Arc;

use storefront_app::context::AppContext;

/// Injected into every request's depot; handlers reach the product and task
/// services through `app`.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
