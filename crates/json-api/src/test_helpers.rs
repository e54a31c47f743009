//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        products::{
            MockProductsService,
            models::{Product, ProductId, ProductRating},
        },
        tasks::{
            MockTasksService,
            models::{Task, TaskId},
        },
    },
};

use crate::{catcher::catcher, state::State};

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_add_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn strict_tasks_mock() -> MockTasksService {
    let mut tasks = MockTasksService::new();

    tasks.expect_list_tasks().never();
    tasks.expect_get_task().never();
    tasks.expect_add_task().never();
    tasks.expect_save_task().never();
    tasks.expect_delete_task().never();

    tasks
}

fn state_with(products: MockProductsService, tasks: MockTasksService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        tasks: Arc::new(tasks),
    })
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route)).catcher(catcher())
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(state_with(products, strict_tasks_mock()), route)
}

pub(crate) fn tasks_service(tasks: MockTasksService, route: Router) -> Service {
    service(state_with(strict_products_mock(), tasks), route)
}

pub(crate) fn make_product(id: u64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: 9.99,
        description: "A product".to_string(),
        category: "electronics".to_string(),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
        rating: ProductRating {
            rate: 4.1,
            count: 259,
        },
    }
}

pub(crate) fn make_task(id: u64) -> Task {
    Task::new(
        TaskId::new(id),
        format!("Task {id}"),
        "Something to do".to_string(),
        Timestamp::from_second(1_772_366_400).unwrap_or(Timestamp::UNIX_EPOCH),
        None,
    )
}
