//! proj CLI entry point.

use clap::Parser;
use colored::Colorize;
use proj::cli::commands;
use proj::cli::{Cli, Commands};
use proj::config::resolve_db_path;
use proj::error::Error;
use proj::storage::SqliteStorage;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                eprintln!("{}", e.to_structured_json());
            } else {
                eprintln!("{}", format!("==> Error: {e}").red());
                if let Some(hint) = e.hint() {
                    eprintln!("  Hint: {hint}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,rusqlite=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn open_storage(cli: &Cli) -> Result<SqliteStorage, Error> {
    let db_path = resolve_db_path(cli.db.as_deref())?;
    SqliteStorage::open(&db_path)
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::Init(args) => {
            let mut storage = open_storage(cli)?;
            commands::init::execute(&mut storage, args, cli.json)
        }
        Commands::Commit => {
            let mut storage = open_storage(cli)?;
            let cwd = std::env::current_dir()?;
            commands::commit::execute(&mut storage, &cwd, cli.json)
        }
        Commands::Start { name } => {
            let storage = open_storage(cli)?;
            commands::lifecycle::execute_start(&storage, name, cli.json)
        }
        Commands::Stop { name } => {
            let storage = open_storage(cli)?;
            commands::lifecycle::execute_stop(&storage, name, cli.json)
        }
        Commands::Completions { shell } => commands::completions::execute(shell),
    }
}
