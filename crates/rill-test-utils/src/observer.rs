// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry observer that records events for later assertions.

use std::sync::Mutex;

use rill_core::{ExtensionKind, RillError};
use rill_registry::{ProviderMode, RegistryObserver};

/// Records `registered` events and the names of rejected registrations.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    registered: Mutex<Vec<(ExtensionKind, String, ProviderMode)>>,
    rejected: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registered_events(&self) -> Vec<(ExtensionKind, String, ProviderMode)> {
        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn rejected_names(&self) -> Vec<String> {
        self.rejected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl RegistryObserver for RecordingObserver {
    fn registered(&self, kind: ExtensionKind, name: &str, mode: ProviderMode) {
        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((kind, name.to_string(), mode));
    }

    fn rejected(&self, name: &str, _error: &RillError) {
        self.rejected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(name.to_string());
    }
}
