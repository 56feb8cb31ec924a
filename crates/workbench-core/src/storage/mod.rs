//! Storage layer - SQLite
//!
//! Provides database management and schema bootstrap for workbench.
//!
//! # Architecture
//!
//! - `database`: Connection pool management and initialization
//! - `schema`: Table definitions, created idempotently on connect
//!
//! # Usage
//!
//! ```ignore
//! use workbench_core::storage::Database;
//!
//! // Create an in-memory database for testing
//! let db = Database::in_memory().await?;
//! ```

pub mod database;
pub mod schema;

// Re-export commonly used types
pub use database::{Database, DatabaseConfig, default_database_path};
pub use schema::init_schema;
