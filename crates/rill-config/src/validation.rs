// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation.
//!
//! Collects every problem instead of stopping at the first one.

use crate::diagnostic::ConfigError;
use crate::model::RillConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_config(config: &RillConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let pipeline = &config.pipeline;
    for (key, value) in [("source", &pipeline.source), ("sink", &pipeline.sink)] {
        if matches!(value, Some(name) if name.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: format!("pipeline.{key} must not be blank"),
            });
        }
    }

    for (i, step) in pipeline.functions.iter().enumerate() {
        if step.name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("pipeline.functions[{i}].name must not be blank"),
            });
        }
        if step.output.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("pipeline.functions[{i}].output must not be blank"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
