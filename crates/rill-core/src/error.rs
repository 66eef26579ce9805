// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Rill stream runtime.

use thiserror::Error;

use crate::types::ExtensionKind;

/// The primary error type shared by the registry, built-in extensions, and the pipeline layer.
#[derive(Debug, Error)]
pub enum RillError {
    /// Configuration errors (missing pipeline names, bad extension properties).
    #[error("configuration error: {0}")]
    Config(String),

    /// The registration candidate is not one of the accepted provider shapes.
    #[error("unsupported provider kind for extension `{name}`")]
    UnsupportedProviderKind { name: String },

    /// The name is already taken within its extension kind.
    #[error("{kind} name already exists: {name}")]
    DuplicateName { kind: ExtensionKind, name: String },

    /// A registered factory failed to construct an instance.
    #[error("failed to construct {kind} `{name}`: {source}")]
    ProviderConstructionFailed {
        kind: ExtensionKind,
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configured extension name did not resolve to anything.
    #[error("unknown {kind} type: {name}")]
    ExtensionNotFound { kind: ExtensionKind, name: String },

    /// Source runtime errors (bad datasource, consumer gone).
    #[error("source error: {message}")]
    Source {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Sink runtime errors (write failure, sink not open).
    #[error("sink error: {message}")]
    Sink {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Function validation or evaluation errors.
    #[error("function `{name}`: {message}")]
    Function { name: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RillError {
    /// Shorthand for a [`RillError::Function`] error.
    pub fn function(name: impl Into<String>, message: impl Into<String>) -> Self {
        RillError::Function {
            name: name.into(),
            message: message.into(),
        }
    }
}
