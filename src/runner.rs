//! Shell command execution for `start` and `stop`.
//!
//! Commands run through `sh -c` in the project directory and block until
//! they exit. There is no timeout and nothing tracks the process afterwards.

use std::path::Path;
use std::process::Command;

use colored::Colorize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::Project;

/// Which of a project's commands to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    /// Human name of the command field, used in errors.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "teardown",
        }
    }

    /// The shell string this action runs for `project`.
    #[must_use]
    pub fn command_for(self, project: &Project) -> &str {
        match self {
            Self::Start => &project.command,
            Self::Stop => &project.teardown,
        }
    }
}

/// Run the start or teardown command of `project` in its directory.
///
/// Returns the captured stdout. `echo` is passed through to [`run_shell`].
///
/// # Errors
///
/// Returns `NoCommand` if the selected command is blank, plus anything
/// [`run_shell`] returns.
pub fn run_project(project: &Project, action: Action, echo: bool) -> Result<String> {
    let command = action.command_for(project);
    if command.trim().is_empty() {
        return Err(Error::NoCommand {
            name: project.name.clone(),
            kind: action.kind(),
        });
    }

    info!(project = %project.name, action = action.kind(), "Running project command");
    run_shell(command, Path::new(&project.path), echo)
}

/// Run `sh -c <command>` in `dir` and wait for it.
///
/// With `echo`, prints the invocation before running and the captured
/// stdout afterwards. Stderr of a successful run is always passed through
/// to our stderr.
///
/// # Errors
///
/// Returns `PathNotFound` if `dir` is not a directory, `Io` if the shell
/// cannot be spawned, and `CommandFailed` on a non-zero exit.
pub fn run_shell(command: &str, dir: &Path, echo: bool) -> Result<String> {
    if !dir.is_dir() {
        return Err(Error::PathNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command).current_dir(dir);

    if echo {
        println!("{}", format!("==> Executing: sh -c {command}").magenta());
    }
    debug!(dir = %dir.display(), "Spawning shell");

    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        let context = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };
        return Err(Error::CommandFailed {
            command: command.to_string(),
            code: output.status.code(),
            output: context.to_string(),
        });
    }

    if !stderr.is_empty() {
        eprint!("{stderr}");
    }
    if echo && !stdout.is_empty() {
        println!("{}", format!("==> Output: {stdout}").blue());
    }

    Ok(stdout)
}
