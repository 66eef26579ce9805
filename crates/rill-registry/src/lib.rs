// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named extension registry for the Rill stream runtime.
//!
//! Plugins register sources, sinks, and functions under a name, either as a
//! shared instance or as a factory producing a fresh instance per lookup. The
//! pipeline layer then resolves configured names back to implementations.
//!
//! ```
//! use rill_registry::{Candidate, ExtensionRegistry};
//! # use rill_core::{Function, RillError};
//! # struct Upper;
//! # impl Function for Upper {
//! #     fn validate(&self, _: &[serde_json::Value]) -> Result<(), RillError> { Ok(()) }
//! #     fn exec(&self, a: &[serde_json::Value]) -> Result<serde_json::Value, RillError> { Ok(a[0].clone()) }
//! # }
//!
//! let registry = ExtensionRegistry::new();
//! registry.register("upper", Candidate::function(Upper)).unwrap();
//! assert!(registry.resolve_function("upper").unwrap().is_some());
//! assert!(registry.register("upper", Candidate::function(Upper)).is_err());
//! ```

pub mod observer;
pub mod provider;
pub mod registry;

pub use observer::{NoopObserver, RegistryObserver, TracingObserver};
pub use provider::{
    Candidate, Factory, FunctionFactory, Provider, ProviderMode, SinkFactory, SourceFactory,
};
pub use registry::ExtensionRegistry;
