// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in extensions compiled into the Rill binary.
//!
//! Built-ins go through the same [`ExtensionRegistry::register`] path as any
//! plugin. Stateful extensions are registered as factories so every pipeline
//! gets its own instance; the stateless string functions are shared.

pub mod function;
pub mod sink;
pub mod source;

pub use function::{ConcatFunction, LowerFunction, UpperFunction};
pub use sink::{LogSink, MemorySink};
pub use source::MemorySource;

use rill_core::RillError;
use rill_registry::{Candidate, ExtensionRegistry};

/// Register every built-in extension.
///
/// - `memory` (source, factory)
/// - `log` (sink, factory)
/// - `upper`, `lower`, `concat` (functions, shared instances)
pub fn register_builtins(registry: &ExtensionRegistry) -> Result<(), RillError> {
    registry.register("memory", Candidate::source_factory(MemorySource::new))?;
    registry.register("log", Candidate::sink_factory(LogSink::new))?;
    registry.register("upper", Candidate::function(UpperFunction))?;
    registry.register("lower", Candidate::function(LowerFunction))?;
    registry.register("concat", Candidate::function(ConcatFunction))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_core::ExtensionKind;
    use rill_registry::ProviderMode;

    #[test]
    fn builtins_register_once() {
        let registry = ExtensionRegistry::new();
        register_builtins(&registry).unwrap();

        assert_eq!(registry.names(ExtensionKind::Source), vec!["memory"]);
        assert_eq!(registry.names(ExtensionKind::Sink), vec!["log"]);
        assert_eq!(
            registry.names(ExtensionKind::Function),
            vec!["concat", "lower", "upper"]
        );
        assert_eq!(registry.mode(ExtensionKind::Sink, "log"), Some(ProviderMode::Factory));
        assert_eq!(
            registry.mode(ExtensionKind::Function, "upper"),
            Some(ProviderMode::Instance)
        );
    }

    #[test]
    fn registering_builtins_twice_fails_on_first_duplicate() {
        let registry = ExtensionRegistry::new();
        register_builtins(&registry).unwrap();
        let err = register_builtins(&registry).unwrap_err();
        assert_eq!(err.to_string(), "source name already exists: memory");
        assert_eq!(registry.len(), 5);
    }
}
