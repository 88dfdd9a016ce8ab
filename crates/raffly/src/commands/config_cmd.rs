//! Config subcommand handlers.

use std::collections::HashMap;

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Defaults, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking sensitive fields.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        if let Some(ref backend) = p.backend {
            let _ = writeln!(out, "backend = \"{backend}\"");
        }
        if p.api_key.is_some() {
            let _ = writeln!(out, "api_key = \"****\"");
        }
        if let Some(ref env) = p.api_key_env {
            let _ = writeln!(out, "api_key_env = \"{env}\"");
        }
        if let Some(ref path) = p.events_file {
            let _ = writeln!(out, "events_file = \"{}\"", path.display());
        }
        if let Some(lat) = p.home_lat {
            let _ = writeln!(out, "home_lat = {lat}");
        }
        if let Some(lng) = p.home_lng {
            let _ = writeln!(out, "home_lng = {lng}");
        }
    }

    out
}

/// Delegate to the shared config crate's save function.
fn save_config(cfg: &Config) -> Result<(), CliError> {
    config::save_config(cfg)?;
    Ok(())
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn parse_coordinate(raw: &str, field: &str, limit: f64) -> Result<f64, CliError> {
    let value: f64 = raw.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("'{raw}' is not a number"),
    })?;
    if !(-limit..=limit).contains(&value) {
        return Err(CliError::Validation {
            field: field.into(),
            reason: format!("must be within ±{limit}°, got {value}"),
        });
    }
    Ok(value)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("✨ raffly — configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Event snapshot path
            let events_file: String = Input::new()
                .with_prompt("Path to event snapshot (JSON)")
                .interact_text()
                .map_err(prompt_err)?;

            if events_file.is_empty() {
                return Err(CliError::Validation {
                    field: "events_file".into(),
                    reason: "snapshot path cannot be empty".into(),
                });
            }

            // 3. Optional saved location for geolocation checks
            let lat_raw: String = Input::new()
                .with_prompt("Your latitude (blank to skip geolocation)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;

            let (home_lat, home_lng) = if lat_raw.is_empty() {
                (None, None)
            } else {
                let lat = parse_coordinate(&lat_raw, "home_lat", 90.0)?;
                let lng_raw: String = Input::new()
                    .with_prompt("Your longitude")
                    .interact_text()
                    .map_err(prompt_err)?;
                let lng = parse_coordinate(&lng_raw, "home_lng", 180.0)?;
                (Some(lat), Some(lng))
            };

            // 4. Build profile and config
            let profile = Profile {
                backend: None,
                api_key: None,
                api_key_env: None,
                events_file: Some(events_file.into()),
                home_lat,
                home_lng,
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let cfg = Config {
                default_profile: Some(profile_name.clone()),
                defaults: Defaults::default(),
                profiles,
            };

            // 5. Write config
            save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: raffly events list");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(&global.output, &cfg, format_config_redacted, |_| {
                "config".into()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);

            let mut on_profile = false;
            match key.as_str() {
                "default_profile" | "default-profile" => {
                    cfg.default_profile = Some(value.clone());
                }
                "defaults.output" => cfg.defaults.output = value.clone(),
                "defaults.color" => cfg.defaults.color = value.clone(),
                _ => {
                    on_profile = true;
                    let profile = cfg.profiles.entry(profile_name.clone()).or_default();
                    match key.as_str() {
                        "backend" => {
                            profile.backend = Some(value.clone());
                            let _ = profile.backend_url().map_err(CliError::Config)?;
                        }
                        "api_key" | "api-key" => profile.api_key = Some(value.clone()),
                        "api_key_env" | "api-key-env" => profile.api_key_env = Some(value.clone()),
                        "events_file" | "events-file" => {
                            profile.events_file = Some(value.clone().into());
                        }
                        "home_lat" | "home-lat" => {
                            profile.home_lat = Some(parse_coordinate(&value, "home_lat", 90.0)?);
                        }
                        "home_lng" | "home-lng" => {
                            profile.home_lng = Some(parse_coordinate(&value, "home_lng", 180.0)?);
                        }
                        other => {
                            return Err(CliError::Validation {
                                field: other.into(),
                                reason: format!(
                                    "unknown config key '{other}'. Valid keys: default_profile, \
                                     defaults.output, defaults.color, backend, api_key, \
                                     api_key_env, events_file, home_lat, home_lng"
                                ),
                            });
                        }
                    }
                }
            }

            save_config(&cfg)?;
            if on_profile {
                eprintln!("✓ Set {key} on profile '{profile_name}'");
            } else {
                eprintln!("✓ Set {key}");
            }
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: raffly config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                let available: Vec<_> = cfg.profiles.keys().cloned().collect();
                return Err(CliError::ProfileNotFound {
                    name,
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                });
            }

            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }
    }
}
