//! Data models for proj.
//!
//! A single entity exists: the [`Project`] record.

pub mod project;

pub use project::Project;
