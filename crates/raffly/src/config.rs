//! CLI configuration — thin wrapper around `raffly_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--profile, --events-file).

use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use raffly_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// The active profile, if one is configured under the resolved name.
///
/// An explicitly requested profile that doesn't exist is an error; the
/// implicit default simply not being configured is not.
pub fn active_profile<'a>(
    global: &GlobalOpts,
    config: &'a Config,
) -> Result<Option<&'a Profile>, CliError> {
    let name = active_profile_name(global, config);
    match config.profiles.get(&name) {
        Some(profile) => Ok(Some(profile)),
        None if global.profile.is_some() => {
            let mut available: Vec<_> = config.profiles.keys().cloned().collect();
            available.sort();
            Err(CliError::ProfileNotFound {
                name,
                available: available.join(", "),
            })
        }
        None => Ok(None),
    }
}

/// Resolve the event snapshot path: flag/env override, then profile.
pub fn events_file(global: &GlobalOpts, profile: Option<&Profile>) -> Result<PathBuf, CliError> {
    if let Some(ref path) = global.events_file {
        return Ok(path.clone());
    }
    profile
        .and_then(|p| p.events_file.clone())
        .ok_or(CliError::NoSnapshot)
}
