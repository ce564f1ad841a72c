//! The `proj.yml` sidecar file.
//!
//! `init` writes a YAML mirror of the record into the project directory so
//! it can be edited by hand; `commit` reads it back. The file has no link to
//! the database row beyond the project name.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Project;

/// File name of the sidecar inside a project directory.
pub const SIDECAR_FILE: &str = "proj.yml";

/// Path of the sidecar file for a project directory.
#[must_use]
pub fn sidecar_path(dir: &Path) -> PathBuf {
    dir.join(SIDECAR_FILE)
}

/// Write `project` as YAML to `<project.path>/proj.yml`.
///
/// # Errors
///
/// Returns `PathNotFound` if the project directory doesn't exist, or an
/// error if serialization or the write fails.
pub fn write_sidecar(project: &Project) -> Result<PathBuf> {
    let dir = Path::new(&project.path);
    if !dir.is_dir() {
        return Err(Error::PathNotFound {
            path: dir.to_path_buf(),
        });
    }

    let path = sidecar_path(dir);
    let content = serde_yaml::to_string(project).map_err(|source| Error::Yaml {
        path: path.clone(),
        source,
    })?;

    atomic_write(&path, &content)?;
    debug!(path = %path.display(), "Wrote sidecar");
    Ok(path)
}

/// Read the sidecar file from `dir`.
///
/// # Errors
///
/// Returns `SidecarNotFound` if `dir/proj.yml` is missing, or `Yaml` if it
/// cannot be parsed.
pub fn read_sidecar(dir: &Path) -> Result<Project> {
    let path = sidecar_path(dir);
    if !path.exists() {
        return Err(Error::SidecarNotFound {
            dir: dir.to_path_buf(),
        });
    }

    let content = fs::read_to_string(&path)?;
    let project: Project =
        serde_yaml::from_str(&content).map_err(|source| Error::Yaml { path, source })?;

    Ok(project)
}

/// Write content to a file atomically.
///
/// Writes to `<path>.tmp`, syncs it to disk, then renames over `path`. If
/// any step fails, the original file (if any) remains untouched.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("yml.tmp");

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_in(dir: &Path) -> Project {
        Project {
            id: "proj_abc".to_string(),
            name: "site".to_string(),
            path: dir.to_string_lossy().to_string(),
            command: "hugo server".to_string(),
            teardown: "pkill hugo".to_string(),
        }
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let project = project_in(dir.path());

        let written = write_sidecar(&project).unwrap();
        assert_eq!(written, dir.path().join("proj.yml"));
        assert!(!dir.path().join("proj.yml.tmp").exists());

        assert_eq!(read_sidecar(dir.path()).unwrap(), project);
    }

    #[test]
    fn test_written_keys() {
        let dir = TempDir::new().unwrap();
        write_sidecar(&project_in(dir.path())).unwrap();

        let content = fs::read_to_string(dir.path().join("proj.yml")).unwrap();
        for key in ["id:", "name:", "path:", "command:", "tear_down:"] {
            assert!(content.contains(key), "missing {key} in:\n{content}");
        }
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("proj.yml"), "stale").unwrap();

        write_sidecar(&project_in(dir.path())).unwrap();
        assert_eq!(read_sidecar(dir.path()).unwrap().name, "site");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let mut project = project_in(dir.path());
        project.path = dir.path().join("nope").to_string_lossy().to_string();

        let result = write_sidecar(&project);
        assert!(matches!(result, Err(Error::PathNotFound { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();

        let result = read_sidecar(dir.path());
        assert!(matches!(result, Err(Error::SidecarNotFound { .. })));
    }

    #[test]
    fn test_read_without_tear_down() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("proj.yml"),
            "id: \"123\"\nname: api\npath: /srv/api\ncommand: cargo run\n",
        )
        .unwrap();

        let project = read_sidecar(dir.path()).unwrap();
        assert_eq!(project.id, "123");
        assert_eq!(project.command, "cargo run");
        assert_eq!(project.teardown, "");
    }

    #[test]
    fn test_read_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("proj.yml"), "name: [unterminated").unwrap();

        let err = read_sidecar(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
        assert!(err.to_string().contains("proj.yml"));
    }
}
