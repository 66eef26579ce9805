// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline construction from configured extension names.
//!
//! A pipeline is one source, a list of function steps, and one sink, each
//! resolved from the [`ExtensionRegistry`] by name.

use std::sync::Arc;

use rill_config::PipelineConfig;
use rill_core::{ExtensionKind, Function, RillError, Sink, Source, SourceTuple};
use rill_registry::ExtensionRegistry;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info};

const CHANNEL_CAPACITY: usize = 64;

struct Step {
    name: String,
    function: Arc<dyn Function>,
    args: Vec<String>,
    output: String,
}

pub struct Pipeline {
    source: Arc<dyn Source>,
    steps: Vec<Step>,
    sink: Arc<dyn Sink>,
}

impl Pipeline {
    /// Resolve and configure every extension named in `config`.
    ///
    /// Absent names become [`RillError::ExtensionNotFound`].
    pub fn build(registry: &ExtensionRegistry, config: &PipelineConfig) -> Result<Self, RillError> {
        let source_name = required(config.source.as_deref(), "pipeline.source")?;
        let sink_name = required(config.sink.as_deref(), "pipeline.sink")?;

        let source = registry
            .resolve_source(source_name)?
            .ok_or_else(|| not_found(ExtensionKind::Source, source_name))?;
        source.configure(&config.datasource, &config.source_props)?;

        let mut steps = Vec::with_capacity(config.functions.len());
        for step in &config.functions {
            let function = registry
                .resolve_function(&step.name)?
                .ok_or_else(|| not_found(ExtensionKind::Function, &step.name))?;
            let placeholders: Vec<Value> =
                step.args.iter().map(|a| Value::String(a.clone())).collect();
            function.validate(&placeholders)?;
            steps.push(Step {
                name: step.name.clone(),
                function,
                args: step.args.clone(),
                output: step.output.clone(),
            });
        }

        let sink = registry
            .resolve_sink(sink_name)?
            .ok_or_else(|| not_found(ExtensionKind::Sink, sink_name))?;
        sink.configure(&config.sink_props)?;

        debug!(source = %source_name, sink = %sink_name, steps = steps.len(), "pipeline built");
        Ok(Self {
            source,
            steps,
            sink,
        })
    }

    /// Run the pipeline until the source is exhausted. Returns the number of
    /// tuples delivered to the sink.
    ///
    /// The source and sink are closed even when a step fails; the first error
    /// encountered is returned.
    pub async fn run(self) -> Result<usize, RillError> {
        self.sink.open().await?;

        let (tx, mut rx) = mpsc::channel(CHANNEL_CAPACITY);
        let source = Arc::clone(&self.source);
        let producer = tokio::spawn(async move { source.open(tx).await });

        let consumed = self.consume(&mut rx).await;
        // Unblocks a producer waiting on a full channel after a failed step.
        drop(rx);
        let produced = producer
            .await
            .map_err(|e| RillError::Internal(format!("source task failed: {e}")))
            .and_then(|r| r);
        let source_closed = self.source.close().await;
        let sink_closed = self.sink.close().await;

        let delivered = consumed?;
        produced?;
        source_closed?;
        sink_closed?;

        info!(delivered, "pipeline finished");
        Ok(delivered)
    }

    async fn consume(&self, rx: &mut mpsc::Receiver<SourceTuple>) -> Result<usize, RillError> {
        let mut delivered = 0;
        while let Some(tuple) = rx.recv().await {
            let mut message = tuple.message;
            for step in &self.steps {
                let args: Vec<Value> = step
                    .args
                    .iter()
                    .map(|field| message.get(field).cloned().unwrap_or(Value::Null))
                    .collect();
                let out = step.function.exec(&args).map_err(|e| match e {
                    RillError::Function { .. } => e,
                    other => RillError::function(&step.name, other.to_string()),
                })?;
                message.insert(step.output.clone(), out);
            }
            self.sink.collect(Value::Object(message)).await?;
            delivered += 1;
        }
        Ok(delivered)
    }
}

fn required<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, RillError> {
    value.ok_or_else(|| RillError::Config(format!("{key} is not set")))
}

fn not_found(kind: ExtensionKind, name: &str) -> RillError {
    RillError::ExtensionNotFound {
        kind,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_builtin::{register_builtins, MemorySink};
    use rill_config::FunctionStep;
    use rill_registry::Candidate;
    use rill_test_utils::MockSink;
    use serde_json::json;

    fn config(value: Value) -> PipelineConfig {
        serde_json::from_value(value).unwrap()
    }

    fn registry_with_memory_sink() -> (ExtensionRegistry, Arc<MemorySink>) {
        let registry = ExtensionRegistry::new();
        register_builtins(&registry).unwrap();
        let sink = Arc::new(MemorySink::new());
        registry
            .register("capture", Arc::clone(&sink) as Arc<dyn Sink>)
            .unwrap();
        (registry, sink)
    }

    #[tokio::test]
    async fn memory_to_capture_applies_functions() {
        let (registry, sink) = registry_with_memory_sink();
        let mut cfg = config(json!({
            "source": "memory",
            "datasource": "greetings",
            "source_props": { "data": [{ "msg": "hi" }, { "msg": "yo" }] },
            "sink": "capture",
        }));
        cfg.functions.push(FunctionStep {
            name: "upper".into(),
            args: vec!["msg".into()],
            output: "shout".into(),
        });

        let delivered = Pipeline::build(&registry, &cfg).unwrap().run().await.unwrap();

        assert_eq!(delivered, 2);
        assert_eq!(
            sink.items().await,
            vec![
                json!({ "msg": "hi", "shout": "HI" }),
                json!({ "msg": "yo", "shout": "YO" }),
            ]
        );
    }

    #[test]
    fn unknown_sink_is_reported_by_kind_and_name() {
        let (registry, _) = registry_with_memory_sink();
        let cfg = config(json!({ "source": "memory", "sink": "kafka" }));
        let err = Pipeline::build(&registry, &cfg).err().unwrap();
        assert_eq!(err.to_string(), "unknown sink type: kafka");
    }

    #[test]
    fn missing_source_name_is_config_error() {
        let (registry, _) = registry_with_memory_sink();
        let cfg = config(json!({ "sink": "capture" }));
        let err = Pipeline::build(&registry, &cfg).err().unwrap();
        assert!(matches!(err, RillError::Config(ref m) if m == "pipeline.source is not set"));
    }

    #[test]
    fn function_arity_is_checked_at_build() {
        let (registry, _) = registry_with_memory_sink();
        let mut cfg = config(json!({ "source": "memory", "sink": "capture" }));
        cfg.functions.push(FunctionStep {
            name: "upper".into(),
            args: vec![],
            output: "x".into(),
        });
        let err = Pipeline::build(&registry, &cfg).err().unwrap();
        assert!(matches!(err, RillError::Function { ref name, .. } if name == "upper"));
    }

    #[tokio::test]
    async fn function_errors_abort_the_run() {
        let (registry, _) = registry_with_memory_sink();
        let mut cfg = config(json!({
            "source": "memory",
            "source_props": { "data": [{ "n": 3 }] },
            "sink": "capture",
        }));
        cfg.functions.push(FunctionStep {
            name: "lower".into(),
            args: vec!["n".into()],
            output: "n".into(),
        });
        let err = Pipeline::build(&registry, &cfg).unwrap().run().await.unwrap_err();
        assert!(err.to_string().contains("expects a string argument"));
    }

    #[tokio::test]
    async fn failed_step_still_closes_sink() {
        let registry = ExtensionRegistry::new();
        register_builtins(&registry).unwrap();
        let sink = Arc::new(MockSink::new());
        registry
            .register("tracked", Arc::clone(&sink) as Arc<dyn Sink>)
            .unwrap();

        let mut cfg = config(json!({
            "source": "memory",
            "source_props": { "data": [{ "n": 3 }] },
            "sink": "tracked",
        }));
        cfg.functions.push(FunctionStep {
            name: "lower".into(),
            args: vec!["n".into()],
            output: "n".into(),
        });
        let err = Pipeline::build(&registry, &cfg).unwrap().run().await.unwrap_err();

        assert!(matches!(err, RillError::Function { ref name, .. } if name == "lower"));
        assert!(sink.is_closed());
        assert!(sink.items().await.is_empty());
    }

    #[tokio::test]
    async fn collect_failure_closes_sink_and_stops_large_source() {
        let registry = ExtensionRegistry::new();
        register_builtins(&registry).unwrap();
        let sink = Arc::new(MockSink::failing());
        registry
            .register("broken", Arc::clone(&sink) as Arc<dyn Sink>)
            .unwrap();

        // More rows than the channel holds, so the source is blocked on send
        // when the sink fails.
        let rows: Vec<Value> = (0..CHANNEL_CAPACITY * 3).map(|i| json!({ "i": i })).collect();
        let cfg = config(json!({
            "source": "memory",
            "source_props": { "data": rows },
            "sink": "broken",
        }));
        let err = Pipeline::build(&registry, &cfg).unwrap().run().await.unwrap_err();

        assert!(matches!(err, RillError::Sink { .. }));
        assert!(sink.is_closed());
    }

    #[tokio::test]
    async fn mock_source_instance_feeds_pipeline() {
        use rill_test_utils::MockSource;

        let (registry, sink) = registry_with_memory_sink();
        let mut row = rill_core::Properties::new();
        row.insert("id".into(), json!(1));
        registry
            .register("fixed", Candidate::source(MockSource::with_tuples(vec![SourceTuple::new(row)])))
            .unwrap();

        let cfg = config(json!({ "source": "fixed", "sink": "capture" }));
        let delivered = Pipeline::build(&registry, &cfg).unwrap().run().await.unwrap();
        assert_eq!(delivered, 1);
        assert_eq!(sink.items().await, vec![json!({ "id": 1 })]);
    }
}
