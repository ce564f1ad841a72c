//! Push hand edits of `proj.yml` back into the database.

use crate::error::Result;
use crate::model::Project;
use crate::sidecar::read_sidecar;
use crate::storage::SqliteStorage;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the commit command for the sidecar in `dir`.
///
/// The row is matched by the sidecar's `name`; its stored ID never changes.
/// The edited record goes through the same checks as `init`, with a relative
/// `path:` taken relative to `dir`.
///
/// # Errors
///
/// Returns an error if the sidecar is missing, malformed or fails
/// validation, or no project with that name exists.
pub fn execute(storage: &mut SqliteStorage, dir: &Path, json: bool) -> Result<()> {
    if !json {
        println!("{}", "Updating...".green());
    }

    let project = commit(storage, dir)?;

    if json {
        println!("{}", serde_json::to_string(&project)?);
    } else {
        println!("Committed project: {}", project.name);
    }
    Ok(())
}

/// Apply `dir/proj.yml` to the stored project and return the stored result.
pub(crate) fn commit(storage: &mut SqliteStorage, dir: &Path) -> Result<Project> {
    let mut edited = read_sidecar(dir)?;
    edited.validate(dir)?;
    storage.update_project(&edited)?;

    let stored = storage.load_project(&edited.name)?;
    if stored.id != edited.id {
        info!(stored = %stored.id, sidecar = %edited.id, "Sidecar id differs from stored id, keeping stored");
    }
    Ok(stored)
}
