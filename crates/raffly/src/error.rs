//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use raffly_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(raffly::not_found),
        help("Run: raffly {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Snapshot ─────────────────────────────────────────────────────

    #[error("No event snapshot configured")]
    #[diagnostic(
        code(raffly::no_snapshot),
        help(
            "Pass --events-file (-f), set RAFFLY_EVENTS_FILE, or configure\n\
             events_file in your profile: raffly config init"
        )
    )]
    NoSnapshot,

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(raffly::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(raffly::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: raffly config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(raffly::config))]
    Config(#[from] raffly_config::ConfigError),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(raffly::json), help("Check the snapshot file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            Self::NoSnapshot | Self::ProfileNotFound { .. } | Self::Config(_) => exit_code::CONFIG,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EventNotFound { identifier } => CliError::NotFound {
                resource_type: "event".into(),
                identifier,
                list_command: "events list".into(),
            },

            CoreError::Io(err) => CliError::Io(err),

            CoreError::Json(err) => CliError::Json(err),
        }
    }
}
