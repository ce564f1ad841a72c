//! Register a new project.
//!
//! `proj init` writes `proj.yml` into the project directory and saves the
//! record to the database. Re-running it for an existing name reuses that
//! project's ID, so the row is overwritten rather than duplicated.

use crate::cli::InitArgs;
use crate::error::Result;
use crate::model::Project;
use crate::sidecar::write_sidecar;
use crate::storage::SqliteStorage;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Serialize)]
struct InitOutput<'a> {
    #[serde(flatten)]
    project: &'a Project,
    sidecar: PathBuf,
    replaced: bool,
}

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if validation fails, the project directory doesn't
/// exist, or the sidecar or database write fails.
pub fn execute(storage: &mut SqliteStorage, args: &InitArgs, json: bool) -> Result<()> {
    let (project, sidecar, replaced) = register(
        storage,
        &args.name,
        &args.path,
        &args.command,
        args.teardown.as_deref(),
    )?;

    if json {
        let output = InitOutput {
            project: &project,
            sidecar,
            replaced,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let verb = if replaced { "Re-registered" } else { "Created" };
        println!("{}", format!("{verb} project: {}", project.name).green());
        println!("  ID: {}", project.id);
        println!("  Path: {}", project.path);
        println!("  Command: {}", project.command);
        if project.has_teardown() {
            println!("  Teardown: {}", project.teardown);
        }
        println!("  Config: {}", sidecar.display());
    }

    Ok(())
}

/// Build, mirror and save a project record.
///
/// Returns the saved record, the sidecar path and whether an existing
/// project with the same name was replaced.
pub(crate) fn register(
    storage: &mut SqliteStorage,
    name: &str,
    path: &Path,
    command: &str,
    teardown: Option<&str>,
) -> Result<(Project, PathBuf, bool)> {
    let mut project = Project::new(
        name.to_string(),
        path.to_string_lossy().to_string(),
        command.to_string(),
        teardown.map(String::from),
    );
    project.validate(&std::env::current_dir()?)?;

    let existing = storage.find_project(&project.name)?;
    let replaced = existing.is_some();
    if let Some(existing) = existing {
        project.id = existing.id;
    }

    let sidecar = write_sidecar(&project)?;
    storage.save_project(&project)?;

    info!(id = %project.id, name = %project.name, replaced, "Registered project");
    Ok((project, sidecar, replaced))
}
