//! `proj completions <shell>`.

use crate::cli::{Cli, Shell};
use crate::error::Result;
use clap::CommandFactory;
use std::io::{self, Write};

const BIN_NAME: &str = "proj";

impl From<&Shell> for clap_complete::Shell {
    fn from(shell: &Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

/// Print the completion script for `shell` to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn execute(shell: &Shell) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_completions(shell: &Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(clap_complete::Shell::from(shell), &mut cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_list_subcommands() {
        let mut buf = Vec::new();
        write_completions(&Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();

        for sub in ["init", "commit", "start", "stop"] {
            assert!(script.contains(sub), "missing {sub}");
        }
    }
}
