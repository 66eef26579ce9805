// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Merge order (later overrides earlier):
//! 1. Compiled defaults
//! 2. `/etc/rill/rill.toml`
//! 3. `~/.config/rill/rill.toml`
//! 4. `./rill.toml`
//! 5. `RILL_*` environment variables

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RillConfig;

pub(crate) const SYSTEM_CONFIG: &str = "/etc/rill/rill.toml";
pub(crate) const LOCAL_CONFIG: &str = "rill.toml";

pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rill/rill.toml"))
}

/// The full Figment for the standard file hierarchy plus env overrides.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(RillConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment.merge(Toml::file(LOCAL_CONFIG)).merge(env_provider())
}

/// Load configuration from the standard hierarchy.
pub fn load_config() -> Result<RillConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only. No files, no env.
pub fn load_config_from_str(toml_content: &str) -> Result<RillConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RillConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, with env overrides.
pub fn load_config_from_path(path: &Path) -> Result<RillConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RillConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// `RILL_LOGGING_LEVEL` -> `logging.level`, `RILL_PIPELINE_SOURCE` -> `pipeline.source`.
///
/// Figment passes the key with the prefix stripped but in its original case.
/// Only the section prefix is split, so keys like `source_props` keep their underscore.
fn env_provider() -> Env {
    Env::prefixed("RILL_").map(|key| map_env_key(key.as_str()).into())
}

fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ["logging", "registry", "pipeline"] {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}
