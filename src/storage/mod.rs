//! SQLite storage layer for proj.
//!
//! One table, `projects`, keyed by project id.
//!
//! # Submodules
//!
//! - [`schema`] - Table definition and connection pragmas
//! - [`sqlite`] - Record store operations

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStorage;
