//! Configuration management.
//!
//! Resolves where the project database lives. The CLI layer handles
//! `--db` and `PROJ_DB`; everything else falls back to a fixed location
//! under the home directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the project database.
pub const DB_FILE: &str = "projects.db";

/// Get the global proj directory (`~/.proj/`).
#[must_use]
pub fn global_proj_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".proj"))
}

/// Resolve the database path.
///
/// Priority:
/// 1. If `explicit_path` is provided (`--db` / `PROJ_DB`), use it directly
/// 2. Global location: `~/.proj/projects.db`
///
/// # Errors
///
/// Returns a `Config` error if no home directory can be determined.
pub fn resolve_db_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        if path.as_os_str().is_empty() {
            return Err(Error::Config("database path must not be empty".to_string()));
        }
        return Ok(path.to_path_buf());
    }

    global_proj_dir()
        .map(|dir| dir.join(DB_FILE))
        .ok_or_else(|| Error::Config("Could not determine home directory for the database".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_db_path(Some(Path::new("/tmp/custom.db"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_empty_explicit_path_rejected() {
        let result = resolve_db_path(Some(Path::new("")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_default_location() {
        if let Some(dir) = global_proj_dir() {
            let path = resolve_db_path(None).unwrap();
            assert_eq!(path, dir.join("projects.db"));
            assert!(path.ends_with(".proj/projects.db"));
        }
    }
}
