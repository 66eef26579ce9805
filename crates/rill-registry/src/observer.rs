// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration observers.
//!
//! The registry reports registrations to an injected [`RegistryObserver`].
//! Observers return nothing, so they cannot influence a registration's outcome.

use rill_core::{ExtensionKind, RillError};
use tracing::{info, warn};

use crate::provider::ProviderMode;

/// Receives registry events. Called after the table lock is released.
pub trait RegistryObserver: Send + Sync {
    /// A new name was inserted into the `kind` table.
    fn registered(&self, kind: ExtensionKind, name: &str, mode: ProviderMode);

    /// A registration attempt was refused.
    fn rejected(&self, _name: &str, _error: &RillError) {}
}

/// Default observer: emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RegistryObserver for TracingObserver {
    fn registered(&self, kind: ExtensionKind, name: &str, mode: ProviderMode) {
        info!(kind = %kind, name = %name, mode = %mode, "extension registered");
    }

    fn rejected(&self, name: &str, error: &RillError) {
        warn!(name = %name, error = %error, "extension registration rejected");
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RegistryObserver for NoopObserver {
    fn registered(&self, _kind: ExtensionKind, _name: &str, _mode: ProviderMode) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn tracing_observer_logs_registration() {
        TracingObserver.registered(ExtensionKind::Source, "mqtt", ProviderMode::Factory);
        assert!(logs_contain("extension registered"));
        assert!(logs_contain("mqtt"));
        assert!(logs_contain("factory"));
    }

    #[test]
    #[traced_test]
    fn tracing_observer_logs_rejection() {
        let err = RillError::DuplicateName {
            kind: ExtensionKind::Sink,
            name: "log".into(),
        };
        TracingObserver.rejected("log", &err);
        assert!(logs_contain("registration rejected"));
        assert!(logs_contain("sink name already exists: log"));
    }
}
