//! Tasks

pub mod commands;
pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::TasksServiceError;
pub use service::*;
