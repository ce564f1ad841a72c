//! `proj start <name>` and `proj stop <name>`.

use crate::error::Result;
use crate::runner::{run_project, Action};
use crate::storage::SqliteStorage;
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct RunOutput {
    name: String,
    action: &'static str,
    command: String,
    path: String,
    stdout: String,
}

/// Execute the start command.
///
/// # Errors
///
/// Returns an error if the project is unknown or its command fails.
pub fn execute_start(storage: &SqliteStorage, name: &str, json: bool) -> Result<()> {
    if !json {
        println!("{}", format!("Starting {name}").green());
    }
    let output = launch(storage, name, Action::Start, json)?;
    print_json(&output, json)
}

/// Execute the stop command.
///
/// # Errors
///
/// Returns an error if the project is unknown, has no teardown command, or
/// the teardown command fails.
pub fn execute_stop(storage: &SqliteStorage, name: &str, json: bool) -> Result<()> {
    if !json {
        println!("{}", format!("Stopping: {name}").blue());
    }
    let output = launch(storage, name, Action::Stop, json)?;
    print_json(&output, json)
}

fn launch(storage: &SqliteStorage, name: &str, action: Action, json: bool) -> Result<RunOutput> {
    let project = storage.load_project(name)?;
    let stdout = run_project(&project, action, !json)?;

    Ok(RunOutput {
        action: match action {
            Action::Start => "start",
            Action::Stop => "stop",
        },
        command: action.command_for(&project).to_string(),
        name: project.name,
        path: project.path,
        stdout,
    })
}

fn print_json(output: &RunOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(output)?);
    }
    Ok(())
}
