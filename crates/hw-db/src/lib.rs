//! hw-db: database access and persistence layer.
//!
//! This crate provides SQLite-backed storage with connection pooling,
//! embedded migrations, the `Item` model, and the item query module.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
