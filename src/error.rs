//! Error types for the proj CLI.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=db, 3=not_found, 4=validation, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for `--json`

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for proj operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Database (exit 2)
    DatabaseError,

    // Not Found (exit 3)
    ProjectNotFound,
    SidecarNotFound,
    PathNotFound,

    // Validation (exit 4)
    InvalidArgument,
    NoCommand,

    // Config (exit 7)
    ConfigError,

    // I/O and formats (exit 8)
    IoError,
    YamlError,
    JsonError,

    // Shell command (exit 10)
    CommandFailed,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::DatabaseError => "DATABASE_ERROR",
            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::SidecarNotFound => "SIDECAR_NOT_FOUND",
            Self::PathNotFound => "PATH_NOT_FOUND",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NoCommand => "NO_COMMAND",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::YamlError => "YAML_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::DatabaseError => 2,
            Self::ProjectNotFound | Self::SidecarNotFound | Self::PathNotFound => 3,
            Self::InvalidArgument | Self::NoCommand => 4,
            Self::ConfigError => 7,
            Self::IoError | Self::YamlError | Self::JsonError => 8,
            Self::CommandFailed => 10,
        }
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in proj operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Project not found: {name}")]
    ProjectNotFound { name: String },

    #[error("No proj.yml found in {}", dir.display())]
    SidecarNotFound { dir: PathBuf },

    #[error("Project path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Project '{name}' has no {kind} command")]
    NoCommand { name: String, kind: &'static str },

    #[error("Command `{command}` failed ({}): {output}", exit_status(*code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn exit_status(code: Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"))
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::ProjectNotFound { .. } => ErrorCode::ProjectNotFound,
            Self::SidecarNotFound { .. } => ErrorCode::SidecarNotFound,
            Self::PathNotFound { .. } => ErrorCode::PathNotFound,
            Self::NoCommand { .. } => ErrorCode::NoCommand,
            Self::CommandFailed { .. } => ErrorCode::CommandFailed,
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Yaml { .. } => ErrorCode::YamlError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Recovery hint shown under the error message.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound { name } => Some(format!(
                "Register it first: proj init --name {name} --path <dir> --command <cmd>"
            )),
            Self::SidecarNotFound { .. } => Some(
                "Run `proj commit` from a project directory created by `proj init`".to_string(),
            ),
            Self::NoCommand { name, kind } if *kind == "teardown" => Some(format!(
                "Add `tear_down:` to {name}'s proj.yml and run `proj commit`"
            )),
            Self::PathNotFound { .. } => Some(
                "Edit `path:` in the project's proj.yml and run `proj commit`".to_string(),
            ),
            _ => None,
        }
    }

    /// Structured JSON representation for `--json` consumers.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
