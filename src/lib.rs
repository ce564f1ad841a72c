//! proj - codebase project management from the command line
//!
//! Register a project directory with the commands that start and stop it,
//! then run those commands by name.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - The project record
//! - [`storage`] - SQLite record store
//! - [`sidecar`] - The `proj.yml` file mirrored into each project
//! - [`runner`] - Shell command execution
//! - [`config`] - Database location
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod runner;
pub mod sidecar;
pub mod storage;

pub use error::{Error, Result};
