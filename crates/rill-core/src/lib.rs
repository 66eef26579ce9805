// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Rill stream runtime.
//!
//! This crate provides the capability traits implemented by extensions
//! (sources, sinks, functions), the shared error type, and the common types
//! used by the registry and the pipeline layer.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RillError;
pub use traits::{Function, Sink, Source};
pub use types::{ExtensionKind, Properties, SourceTuple};
