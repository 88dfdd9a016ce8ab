//! Shared configuration for the raffly CLI.
//!
//! TOML profiles, credential resolution (env + plaintext), and the saved
//! entrant location that feeds geolocation eligibility checks. The CLI adds
//! `GlobalOpts`-aware wrappers on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API key configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// A named profile: where event snapshots come from and who the entrant is.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Lottery backend base URL (e.g., "https://lottery.example.com").
    /// Unused for local-snapshot browsing but validated when set.
    pub backend: Option<String>,

    /// Backend API key (plaintext — prefer the env var).
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Path to the JSON event snapshot this profile browses.
    pub events_file: Option<PathBuf>,

    /// Saved entrant latitude, degrees. Used by eligibility checks when no
    /// coordinate is passed on the command line.
    pub home_lat: Option<f64>,

    /// Saved entrant longitude, degrees.
    pub home_lng: Option<f64>,
}

impl Profile {
    /// The saved entrant coordinate, only when both halves are present.
    pub fn home_location(&self) -> Option<(f64, f64)> {
        Some((self.home_lat?, self.home_lng?))
    }

    /// Parse and validate the backend URL, if one is configured.
    pub fn backend_url(&self) -> Result<Option<url::Url>, ConfigError> {
        match self.backend {
            None => Ok(None),
            Some(ref raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::Validation {
                    field: "backend".into(),
                    reason: format!("invalid URL: {raw}"),
                }),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "raffly", "raffly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("raffly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load a Config from a specific TOML file, layered with `RAFFLY_*` env.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("RAFFLY_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to `path`, creating parent
/// directories as needed.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the backend API key from the credential chain:
/// profile's named env var, then `RAFFLY_API_KEY`, then plaintext config.
pub fn resolve_api_key(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    if let Some(ref env_name) = profile.api_key_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Ok(val) = std::env::var("RAFFLY_API_KEY") {
        return Ok(SecretString::from(val));
    }

    if let Some(ref key) = profile.api_key {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn default_config_has_default_profile() {
        let cfg = Config::default();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.output, "table");
    }

    #[test]
    fn profile_parses_from_toml() {
        let cfg: Config = toml::from_str(
            r#"
            default_profile = "home"

            [profiles.home]
            events_file = "/data/events.json"
            home_lat = 43.6532
            home_lng = -79.3832
            "#,
        )
        .unwrap();
        let profile = &cfg.profiles["home"];
        assert_eq!(profile.home_location(), Some((43.6532, -79.3832)));
        assert_eq!(
            profile.events_file.as_deref(),
            Some(std::path::Path::new("/data/events.json"))
        );
    }

    #[test]
    fn home_location_requires_both_halves() {
        let profile = Profile {
            home_lat: Some(43.6532),
            ..Profile::default()
        };
        assert_eq!(profile.home_location(), None);
    }

    #[test]
    fn backend_url_rejects_garbage() {
        let profile = Profile {
            backend: Some("not a url".into()),
            ..Profile::default()
        };
        assert!(matches!(
            profile.backend_url(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn api_key_falls_back_to_plaintext() {
        let profile = Profile {
            api_key: Some("k-123".into()),
            ..Profile::default()
        };
        let key = resolve_api_key(&profile, "default").unwrap();
        assert_eq!(key.expose_secret(), "k-123");
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut profiles = HashMap::new();
        profiles.insert(
            "home".to_owned(),
            Profile {
                events_file: Some("/data/events.json".into()),
                home_lat: Some(43.6532),
                home_lng: Some(-79.3832),
                ..Profile::default()
            },
        );
        let cfg = Config {
            default_profile: Some("home".into()),
            defaults: Defaults::default(),
            profiles,
        };

        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.default_profile.as_deref(), Some("home"));
        let profile = &loaded.profiles["home"];
        assert_eq!(profile.home_location(), Some((43.6532, -79.3832)));
        assert_eq!(
            profile.events_file.as_deref(),
            Some(std::path::Path::new("/data/events.json"))
        );
    }

    #[test]
    fn missing_api_key_reports_profile() {
        let profile = Profile::default();
        let err = resolve_api_key(&profile, "work").unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { profile } if profile == "work"));
    }
}
