// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./shelter.toml` > `~/.config/shelter/shelter.toml`
//! > `/etc/shelter/shelter.toml`, with environment variable overrides via the
//! `SHELTER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ShelterConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/shelter/shelter.toml` (system-wide)
/// 3. `~/.config/shelter/shelter.toml` (user XDG config)
/// 4. `./shelter.toml` (local directory)
/// 5. `SHELTER_*` environment variables
pub fn load_config() -> Result<ShelterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShelterConfig::default()))
        .merge(Toml::file("/etc/shelter/shelter.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("shelter/shelter.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("shelter.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ShelterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShelterConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ShelterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShelterConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` instead of `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `SHELTER_STORAGE_DATABASE_PATH` must map to
/// `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("SHELTER_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
