// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./sitesmith.toml` > `~/.config/sitesmith/sitesmith.toml`
//! > `/etc/sitesmith/sitesmith.toml` with environment variable overrides via
//! `SITESMITH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SitesmithConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/sitesmith/sitesmith.toml` (system-wide)
/// 3. `~/.config/sitesmith/sitesmith.toml` (user XDG config)
/// 4. `./sitesmith.toml` (local directory)
/// 5. `SITESMITH_*` environment variables
pub fn load_config() -> Result<SitesmithConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SitesmithConfig::default()))
        .merge(Toml::file("/etc/sitesmith/sitesmith.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("sitesmith/sitesmith.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("sitesmith.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<SitesmithConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SitesmithConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SitesmithConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SitesmithConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `SITESMITH_OPENAI_API_KEY`
/// must map to `openai.api_key`, not `openai.api.key`.
fn env_provider() -> Env {
    Env::prefixed("SITESMITH_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: SITESMITH_OPENAI_API_KEY -> "openai_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
