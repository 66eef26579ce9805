// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the capability traits and the registry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Free-form key/value properties handed to sources and sinks at configure time.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Identifies which extension-point table a registration or lookup targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExtensionKind {
    Source,
    Sink,
    Function,
}

impl ExtensionKind {
    /// All extension kinds, in display order.
    pub const ALL: [ExtensionKind; 3] = [
        ExtensionKind::Source,
        ExtensionKind::Sink,
        ExtensionKind::Function,
    ];
}

/// A single record emitted by a [`Source`](crate::traits::Source).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceTuple {
    /// The record payload.
    pub message: Properties,
    /// Metadata about where the record came from (datasource, offsets, topic).
    pub meta: Properties,
}

impl SourceTuple {
    /// Create a tuple with the given payload and empty metadata.
    pub fn new(message: Properties) -> Self {
        Self {
            message,
            meta: Properties::new(),
        }
    }

    /// Attach a metadata entry, returning the tuple.
    pub fn with_meta(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }
}
