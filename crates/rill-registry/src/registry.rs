// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension registry for sources, sinks, and functions.
//!
//! The `ExtensionRegistry` keeps one append-only table per extension kind.
//! Names are unique within a kind; a registered name is never replaced.

use std::any::Any;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rill_core::{ExtensionKind, Function, RillError, Sink, Source};
use tracing::debug;

use crate::observer::{RegistryObserver, TracingObserver};
use crate::provider::{Candidate, Provider, ProviderMode};

/// Registry of named extensions.
///
/// Safe to share across threads behind an `Arc`. Registration is a
/// compare-and-insert under the table's write lock; lookups take read locks
/// and run factories after the lock is released.
pub struct ExtensionRegistry {
    sources: DashMap<String, Provider<dyn Source>>,
    sinks: DashMap<String, Provider<dyn Sink>>,
    functions: DashMap<String, Provider<dyn Function>>,
    observer: Arc<dyn RegistryObserver>,
}

impl ExtensionRegistry {
    /// Create an empty registry that logs through `tracing`.
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    /// Create an empty registry reporting to the given observer.
    pub fn with_observer(observer: Arc<dyn RegistryObserver>) -> Self {
        Self {
            sources: DashMap::new(),
            sinks: DashMap::new(),
            functions: DashMap::new(),
            observer,
        }
    }

    /// Register a named extension.
    ///
    /// Fails with [`RillError::DuplicateName`] if the name is already taken
    /// in the candidate's kind; the existing entry is left untouched.
    pub fn register(
        &self,
        name: impl Into<String>,
        candidate: impl Into<Candidate>,
    ) -> Result<(), RillError> {
        let name = name.into();
        let candidate = candidate.into();
        if name.trim().is_empty() {
            debug!(kind = %candidate.kind(), "registering extension with a blank name");
        }

        let kind = candidate.kind();
        let mode = candidate.mode();
        let result = match candidate {
            Candidate::Source(p) => insert(&self.sources, kind, &name, p),
            Candidate::Sink(p) => insert(&self.sinks, kind, &name, p),
            Candidate::Function(p) => insert(&self.functions, kind, &name, p),
        };

        match &result {
            Ok(()) => self.observer.registered(kind, &name, mode),
            Err(e) => self.observer.rejected(&name, e),
        }
        result
    }

    /// Register an untyped value, classifying it first.
    ///
    /// Values that are not one of the accepted provider shapes fail with
    /// [`RillError::UnsupportedProviderKind`] and touch no table.
    pub fn register_any(
        &self,
        name: impl Into<String>,
        value: Box<dyn Any + Send + Sync>,
    ) -> Result<(), RillError> {
        let name = name.into();
        match Candidate::classify(value) {
            Ok(candidate) => self.register(name, candidate),
            Err(_) => {
                let err = RillError::UnsupportedProviderKind { name: name.clone() };
                self.observer.rejected(&name, &err);
                Err(err)
            }
        }
    }

    /// Resolve a source by name. `Ok(None)` if it was never registered.
    pub fn resolve_source(&self, name: &str) -> Result<Option<Arc<dyn Source>>, RillError> {
        resolve(&self.sources, ExtensionKind::Source, name)
    }

    /// Resolve a sink by name. `Ok(None)` if it was never registered.
    pub fn resolve_sink(&self, name: &str) -> Result<Option<Arc<dyn Sink>>, RillError> {
        resolve(&self.sinks, ExtensionKind::Sink, name)
    }

    /// Resolve a function by name. `Ok(None)` if it was never registered.
    pub fn resolve_function(&self, name: &str) -> Result<Option<Arc<dyn Function>>, RillError> {
        resolve(&self.functions, ExtensionKind::Function, name)
    }

    /// Whether `name` is registered for `kind`.
    pub fn contains(&self, kind: ExtensionKind, name: &str) -> bool {
        match kind {
            ExtensionKind::Source => self.sources.contains_key(name),
            ExtensionKind::Sink => self.sinks.contains_key(name),
            ExtensionKind::Function => self.functions.contains_key(name),
        }
    }

    /// How `name` is provided for `kind`, if registered.
    pub fn mode(&self, kind: ExtensionKind, name: &str) -> Option<ProviderMode> {
        match kind {
            ExtensionKind::Source => self.sources.get(name).map(|e| e.mode()),
            ExtensionKind::Sink => self.sinks.get(name).map(|e| e.mode()),
            ExtensionKind::Function => self.functions.get(name).map(|e| e.mode()),
        }
    }

    /// Registered names for `kind`, sorted.
    pub fn names(&self, kind: ExtensionKind) -> Vec<String> {
        let mut names: Vec<String> = match kind {
            ExtensionKind::Source => self.sources.iter().map(|e| e.key().clone()).collect(),
            ExtensionKind::Sink => self.sinks.iter().map(|e| e.key().clone()).collect(),
            ExtensionKind::Function => self.functions.iter().map(|e| e.key().clone()).collect(),
        };
        names.sort();
        names
    }

    /// Total number of registered extensions across all kinds.
    pub fn len(&self) -> usize {
        self.sources.len() + self.sinks.len() + self.functions.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("sources", &self.names(ExtensionKind::Source))
            .field("sinks", &self.names(ExtensionKind::Sink))
            .field("functions", &self.names(ExtensionKind::Function))
            .finish()
    }
}

fn insert<T: ?Sized>(
    table: &DashMap<String, Provider<T>>,
    kind: ExtensionKind,
    name: &str,
    provider: Provider<T>,
) -> Result<(), RillError> {
    // The entry guard holds the shard write lock across the check and the insert.
    match table.entry(name.to_string()) {
        Entry::Occupied(_) => Err(RillError::DuplicateName {
            kind,
            name: name.to_string(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(provider);
            Ok(())
        }
    }
}

fn resolve<T: ?Sized>(
    table: &DashMap<String, Provider<T>>,
    kind: ExtensionKind,
    name: &str,
) -> Result<Option<Arc<T>>, RillError> {
    // Clone out so the factory runs without holding the shard lock.
    let provider = match table.get(name) {
        Some(entry) => entry.value().clone(),
        None => return Ok(None),
    };
    provider
        .provide()
        .map(Some)
        .map_err(|e| RillError::ProviderConstructionFailed {
            kind,
            name: name.to_string(),
            source: Box::new(e),
        })
}
