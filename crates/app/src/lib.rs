//! Shared storefront domain, catalog client and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
