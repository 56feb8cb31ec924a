//! Workbench Core Library
//!
//! This crate provides the core functionality for Workbench, including:
//! - Project aggregate (projects, materials, steps, categories)
//! - Storage (SQLite connection pooling and schema)
//! - Service façade for the interactive UI
//! - Configuration management

pub mod config;
pub mod error;
pub mod project;
pub mod storage;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::project::{Project, ProjectService};
    pub use crate::storage::Database;
}
