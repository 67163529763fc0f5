//! Stockroom catalog, checkout and reporting services over `PostgreSQL`.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod observability;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
