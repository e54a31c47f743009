//! Route tree.

use salvo::prelude::*;

use crate::{healthcheck, products, tasks};

/// Every API route, without hoops or state.
pub(crate) fn routes() -> Router {
    Router::new()
        .get(healthcheck::handler)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("tasks")
                .get(tasks::index::handler)
                .post(tasks::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(tasks::get::handler)
                        .put(tasks::update::handler)
                        .delete(tasks::delete::handler),
                ),
        )
}
