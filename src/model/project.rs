//! Project model for proj.
//!
//! A project is a directory plus the shell commands that bring it up and
//! tear it down. The same struct is stored in SQLite and mirrored to the
//! `proj.yml` sidecar file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// A registered project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (`proj_` + 12 chars of a UUID)
    #[serde(default)]
    pub id: String,

    /// Name used by `start`/`stop`
    pub name: String,

    /// Directory the commands run in
    pub path: String,

    /// Boot command
    pub command: String,

    /// Tear down command (empty when not configured)
    #[serde(rename = "tear_down", default)]
    pub teardown: String,
}

impl Project {
    /// Create a new project with a freshly generated ID.
    pub fn new(name: String, path: String, command: String, teardown: Option<String>) -> Self {
        Self {
            id: generate_id(),
            name,
            path,
            command,
            teardown: teardown.unwrap_or_default(),
        }
    }

    /// Check a record before it is stored.
    ///
    /// Trims the name, rejects a blank name or command, and replaces `path`
    /// with its canonical form. A relative `path` is taken relative to
    /// `base`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a blank name or command, and
    /// `PathNotFound` if `path` is not an existing directory.
    pub fn validate(&mut self, base: &Path) -> Result<()> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(Error::InvalidArgument("name must not be empty".to_string()));
        }
        if self.command.trim().is_empty() {
            return Err(Error::InvalidArgument(format!(
                "command for '{}' must not be empty",
                self.name
            )));
        }

        let raw = Path::new(&self.path);
        let joined = if raw.is_absolute() { raw.to_path_buf() } else { base.join(raw) };
        let resolved = std::fs::canonicalize(&joined)
            .ok()
            .filter(|p| p.is_dir())
            .ok_or_else(|| Error::PathNotFound { path: joined.clone() })?;

        self.path = resolved.to_string_lossy().to_string();
        Ok(())
    }

    /// Whether a teardown command is configured.
    #[must_use]
    pub fn has_teardown(&self) -> bool {
        !self.teardown.trim().is_empty()
    }
}

/// Generate an opaque project ID.
#[must_use]
pub fn generate_id() -> String {
    format!("proj_{}", &uuid::Uuid::new_v4().simple().to_string()[..12])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_project() {
        let project = Project::new(
            "api".to_string(),
            "/home/user/api".to_string(),
            "docker compose up -d".to_string(),
            None,
        );

        assert!(project.id.starts_with("proj_"));
        assert_eq!(project.id.len(), "proj_".len() + 12);
        assert_eq!(project.name, "api");
        assert_eq!(project.teardown, "");
        assert!(!project.has_teardown());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_teardown_serializes_as_tear_down() {
        let project = Project::new(
            "api".to_string(),
            "/srv/api".to_string(),
            "make up".to_string(),
            Some("make down".to_string()),
        );
        let yaml = serde_yaml::to_string(&project).unwrap();
        assert!(yaml.contains("tear_down: make down"));
        assert!(!yaml.contains("teardown:"));
    }

    #[test]
    fn test_validate_resolves_relative_path() {
        let base = TempDir::new().unwrap();
        std::fs::create_dir(base.path().join("app")).unwrap();
        let mut project = Project::new(
            "  app ".to_string(),
            "app".to_string(),
            "make".to_string(),
            None,
        );

        project.validate(base.path()).unwrap();

        assert_eq!(project.name, "app");
        assert_eq!(
            Path::new(&project.path),
            base.path().join("app").canonicalize().unwrap()
        );
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let base = TempDir::new().unwrap();
        let path = base.path().to_string_lossy().to_string();

        let mut blank_name = Project::new(" ".to_string(), path.clone(), "ls".to_string(), None);
        assert!(matches!(
            blank_name.validate(base.path()),
            Err(Error::InvalidArgument(_))
        ));

        let mut blank_command = Project::new("a".to_string(), path, "  ".to_string(), None);
        assert!(matches!(
            blank_command.validate(base.path()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_or_file_path() {
        let base = TempDir::new().unwrap();
        std::fs::write(base.path().join("file.txt"), "x").unwrap();

        for path in ["missing", "file.txt"] {
            let mut project =
                Project::new("a".to_string(), path.to_string(), "ls".to_string(), None);
            assert!(matches!(
                project.validate(base.path()),
                Err(Error::PathNotFound { .. })
            ));
        }
    }
}
