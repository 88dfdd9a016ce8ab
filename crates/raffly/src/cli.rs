//! Clap derive structures for the `raffly` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// raffly -- terminal client for event-lottery browsing
#[derive(Debug, Parser)]
#[command(
    name = "raffly",
    version,
    about = "Browse event lotteries from the command line",
    long_about = "A terminal client for event-lottery services.\n\n\
        Browses event snapshots (JSON exports of the backend's event set),\n\
        searches and filters them, and answers waitlist/geolocation\n\
        eligibility questions locally.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Profile to use
    #[arg(long, short = 'p', env = "RAFFLY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Path to the JSON event snapshot (overrides profile)
    #[arg(long, short = 'f', env = "RAFFLY_EVENTS_FILE", global = true)]
    pub events_file: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "RAFFLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse, search, and check eligibility for events
    #[command(alias = "ev", alias = "e")]
    Events(EventsArgs),

    /// List the distinct tags across the event snapshot
    Tags,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  EVENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List events, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Free-text search over name and description (case-insensitive)
        #[arg(long)]
        query: Option<String>,

        /// Tags to match (comma-separated; any-of semantics)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Only events in this lifecycle state
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// Only events whose registration window is open right now
        #[arg(long)]
        open_now: bool,

        /// Only free events
        #[arg(long)]
        free: bool,
    },

    /// Show full details for one event
    Get {
        /// Event id or name
        event: String,
    },

    /// Answer the join-button question: can I register, and from here?
    Eligibility {
        /// Event id or name
        event: String,

        /// Your latitude in degrees (defaults to the profile's saved location)
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Your longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,
    },

    /// Distance from a coordinate to an event's venue
    Distance {
        /// Event id or name
        event: String,

        /// Latitude in degrees
        #[arg(long, required = true, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, required = true, allow_negative_numbers = true)]
        lng: f64,
    },
}

/// Lifecycle states accepted by `--status`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Open,
    Closed,
    LotteryDrawn,
    Completed,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a configuration value
    Set {
        /// Config key (dot-separated path, e.g., "profiles.home.events_file")
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
