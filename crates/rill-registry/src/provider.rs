// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Providers and registration candidates.
//!
//! A [`Provider`] is what the registry stores for a name: either a shared
//! instance or a factory invoked once per resolution. A [`Candidate`] pairs a
//! provider with its extension kind, giving exactly six accepted shapes.

use std::any::Any;
use std::sync::Arc;

use rill_core::{ExtensionKind, Function, RillError, Sink, Source};
use strum::Display;

/// Zero-argument constructor producing a fresh extension instance.
pub type Factory<T> = Arc<dyn Fn() -> Result<Arc<T>, RillError> + Send + Sync>;

pub type SourceFactory = Factory<dyn Source>;
pub type SinkFactory = Factory<dyn Sink>;
pub type FunctionFactory = Factory<dyn Function>;

/// Which variant a [`Provider`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProviderMode {
    /// Every resolution returns the same shared object.
    Instance,
    /// Every resolution invokes the factory for a fresh object.
    Factory,
}

/// Stored representation of a registered extension.
pub enum Provider<T: ?Sized> {
    /// One object shared by every resolution.
    Instance(Arc<T>),
    /// Invoked per resolution; each call yields an independent object.
    Factory(Factory<T>),
}

impl<T: ?Sized> Provider<T> {
    pub fn mode(&self) -> ProviderMode {
        match self {
            Provider::Instance(_) => ProviderMode::Instance,
            Provider::Factory(_) => ProviderMode::Factory,
        }
    }

    /// Returns the shared instance, or runs the factory.
    pub fn provide(&self) -> Result<Arc<T>, RillError> {
        match self {
            Provider::Instance(instance) => Ok(Arc::clone(instance)),
            Provider::Factory(factory) => factory(),
        }
    }
}

impl<T: ?Sized> Clone for Provider<T> {
    fn clone(&self) -> Self {
        match self {
            Provider::Instance(instance) => Provider::Instance(Arc::clone(instance)),
            Provider::Factory(factory) => Provider::Factory(Arc::clone(factory)),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Provider::{}", self.mode())
    }
}

/// A classified registration candidate.
///
/// Built through the typed constructors or `From` conversions; untyped values
/// coming across a plugin boundary go through [`Candidate::classify`].
#[derive(Debug, Clone)]
pub enum Candidate {
    /// Targets the source table.
    Source(Provider<dyn Source>),
    /// Targets the sink table.
    Sink(Provider<dyn Sink>),
    /// Targets the function table.
    Function(Provider<dyn Function>),
}

impl Candidate {
    /// The table this candidate targets.
    pub fn kind(&self) -> ExtensionKind {
        match self {
            Candidate::Source(_) => ExtensionKind::Source,
            Candidate::Sink(_) => ExtensionKind::Sink,
            Candidate::Function(_) => ExtensionKind::Function,
        }
    }

    pub fn mode(&self) -> ProviderMode {
        match self {
            Candidate::Source(p) => p.mode(),
            Candidate::Sink(p) => p.mode(),
            Candidate::Function(p) => p.mode(),
        }
    }

    pub fn source<S: Source>(source: S) -> Self {
        Candidate::Source(Provider::Instance(Arc::new(source)))
    }

    pub fn source_factory<S, F>(factory: F) -> Self
    where
        S: Source,
        F: Fn() -> S + Send + Sync + 'static,
    {
        Self::try_source_factory(move || Ok(factory()))
    }

    /// A source factory whose construction may fail.
    pub fn try_source_factory<S, F>(factory: F) -> Self
    where
        S: Source,
        F: Fn() -> Result<S, RillError> + Send + Sync + 'static,
    {
        Candidate::Source(Provider::Factory(Arc::new(move || {
            factory().map(|s| Arc::new(s) as Arc<dyn Source>)
        })))
    }

    pub fn sink<S: Sink>(sink: S) -> Self {
        Candidate::Sink(Provider::Instance(Arc::new(sink)))
    }

    pub fn sink_factory<S, F>(factory: F) -> Self
    where
        S: Sink,
        F: Fn() -> S + Send + Sync + 'static,
    {
        Self::try_sink_factory(move || Ok(factory()))
    }

    /// A sink factory whose construction may fail.
    pub fn try_sink_factory<S, F>(factory: F) -> Self
    where
        S: Sink,
        F: Fn() -> Result<S, RillError> + Send + Sync + 'static,
    {
        Candidate::Sink(Provider::Factory(Arc::new(move || {
            factory().map(|s| Arc::new(s) as Arc<dyn Sink>)
        })))
    }

    pub fn function<F: Function>(function: F) -> Self {
        Candidate::Function(Provider::Instance(Arc::new(function)))
    }

    pub fn function_factory<F, C>(factory: C) -> Self
    where
        F: Function,
        C: Fn() -> F + Send + Sync + 'static,
    {
        Self::try_function_factory(move || Ok(factory()))
    }

    /// A function factory whose construction may fail.
    pub fn try_function_factory<F, C>(factory: C) -> Self
    where
        F: Function,
        C: Fn() -> Result<F, RillError> + Send + Sync + 'static,
    {
        Candidate::Function(Provider::Factory(Arc::new(move || {
            factory().map(|f| Arc::new(f) as Arc<dyn Function>)
        })))
    }

    /// Classify an untyped value handed over by a plugin loader.
    ///
    /// Accepts a `Candidate`, an `Arc<dyn Source|Sink|Function>`, or one of
    /// the factory aliases. Anything else is returned unchanged in `Err`.
    pub fn classify(
        value: Box<dyn Any + Send + Sync>,
    ) -> Result<Candidate, Box<dyn Any + Send + Sync>> {
        let value = match value.downcast::<Candidate>() {
            Ok(c) => return Ok(*c),
            Err(v) => v,
        };
        let value = match value.downcast::<Arc<dyn Source>>() {
            Ok(s) => return Ok(Candidate::Source(Provider::Instance(*s))),
            Err(v) => v,
        };
        let value = match value.downcast::<SourceFactory>() {
            Ok(f) => return Ok(Candidate::Source(Provider::Factory(*f))),
            Err(v) => v,
        };
        let value = match value.downcast::<Arc<dyn Sink>>() {
            Ok(s) => return Ok(Candidate::Sink(Provider::Instance(*s))),
            Err(v) => v,
        };
        let value = match value.downcast::<SinkFactory>() {
            Ok(f) => return Ok(Candidate::Sink(Provider::Factory(*f))),
            Err(v) => v,
        };
        let value = match value.downcast::<Arc<dyn Function>>() {
            Ok(f) => return Ok(Candidate::Function(Provider::Instance(*f))),
            Err(v) => v,
        };
        value
            .downcast::<FunctionFactory>()
            .map(|f| Candidate::Function(Provider::Factory(*f)))
    }
}

impl From<Arc<dyn Source>> for Candidate {
    fn from(source: Arc<dyn Source>) -> Self {
        Candidate::Source(Provider::Instance(source))
    }
}

impl From<Arc<dyn Sink>> for Candidate {
    fn from(sink: Arc<dyn Sink>) -> Self {
        Candidate::Sink(Provider::Instance(sink))
    }
}

impl From<Arc<dyn Function>> for Candidate {
    fn from(function: Arc<dyn Function>) -> Self {
        Candidate::Function(Provider::Instance(function))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_test_utils::{MockFunction, MockSink, MockSource};

    #[test]
    fn typed_constructors_classify_kind_and_mode() {
        let cases = [
            (Candidate::source(MockSource::new()), ExtensionKind::Source, ProviderMode::Instance),
            (Candidate::source_factory(MockSource::new), ExtensionKind::Source, ProviderMode::Factory),
            (Candidate::sink(MockSink::new()), ExtensionKind::Sink, ProviderMode::Instance),
            (Candidate::sink_factory(MockSink::new), ExtensionKind::Sink, ProviderMode::Factory),
            (Candidate::function(MockFunction::new()), ExtensionKind::Function, ProviderMode::Instance),
            (
                Candidate::function_factory(MockFunction::new),
                ExtensionKind::Function,
                ProviderMode::Factory,
            ),
        ];
        for (candidate, kind, mode) in cases {
            assert_eq!(candidate.kind(), kind);
            assert_eq!(candidate.mode(), mode);
        }
    }

    #[test]
    fn classify_accepts_trait_objects_and_factory_aliases() {
        let sink: Arc<dyn Sink> = Arc::new(MockSink::new());
        let c = Candidate::classify(Box::new(sink)).unwrap();
        assert_eq!((c.kind(), c.mode()), (ExtensionKind::Sink, ProviderMode::Instance));

        let factory: FunctionFactory =
            Arc::new(|| Ok(Arc::new(MockFunction::new()) as Arc<dyn Function>));
        let c = Candidate::classify(Box::new(factory)).unwrap();
        assert_eq!((c.kind(), c.mode()), (ExtensionKind::Function, ProviderMode::Factory));

        let c = Candidate::classify(Box::new(Candidate::source(MockSource::new()))).unwrap();
        assert_eq!(c.kind(), ExtensionKind::Source);
    }

    #[test]
    fn classify_rejects_plain_values() {
        assert!(Candidate::classify(Box::new("mqtt".to_string())).is_err());
        assert!(Candidate::classify(Box::new(42_u32)).is_err());
        // A concrete type is not its trait object.
        assert!(Candidate::classify(Box::new(MockSource::new())).is_err());
    }

    #[test]
    fn factory_provider_yields_distinct_instances() {
        let provider: Provider<dyn Source> = match Candidate::source_factory(MockSource::new) {
            Candidate::Source(p) => p,
            other => panic!("unexpected candidate {other:?}"),
        };
        let a = provider.provide().unwrap();
        let b = provider.provide().unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
