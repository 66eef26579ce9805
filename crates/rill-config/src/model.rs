// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently ignored.

pub use rill_core::Properties;
use serde::{Deserialize, Serialize};

/// Top-level Rill configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RillConfig {
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Extension registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// The pipeline to build, by extension name.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Extension registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Register the built-in extensions at startup.
    #[serde(default = "default_true")]
    pub builtins: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { builtins: true }
    }
}

fn default_true() -> bool {
    true
}

/// A linear pipeline: one source, zero or more function steps, one sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Registered source name.
    #[serde(default)]
    pub source: Option<String>,

    /// Datasource handed to the source's `configure`.
    #[serde(default = "default_datasource")]
    pub datasource: String,

    /// Properties handed to the source's `configure`.
    #[serde(default)]
    pub source_props: Properties,

    /// Function steps applied to every tuple, in order.
    #[serde(default)]
    pub functions: Vec<FunctionStep>,

    /// Registered sink name.
    #[serde(default)]
    pub sink: Option<String>,

    /// Properties handed to the sink's `configure`.
    #[serde(default)]
    pub sink_props: Properties,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: None,
            datasource: default_datasource(),
            source_props: Properties::new(),
            functions: Vec::new(),
            sink: None,
            sink_props: Properties::new(),
        }
    }
}

fn default_datasource() -> String {
    "default".to_string()
}

/// One function call in a pipeline.
///
/// The values of the `args` fields are passed to the function and the result
/// is written to `output`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionStep {
    /// Registered function name.
    pub name: String,
    /// Tuple fields whose values become the call's arguments.
    #[serde(default)]
    pub args: Vec<String>,
    /// Tuple field receiving the result.
    pub output: String,
}
