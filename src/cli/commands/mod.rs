//! Command implementations.

pub mod commit;
pub mod completions;
pub mod init;
pub mod lifecycle;
