// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in sinks.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use rill_core::{Properties, RillError, Sink};
use tokio::sync::Mutex;
use tracing::info;

/// Logs every collected item at `info` level.
#[derive(Debug, Default)]
pub struct LogSink {
    collected: AtomicU64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items collected since construction.
    pub fn collected(&self) -> u64 {
        self.collected.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Sink for LogSink {
    fn configure(&self, _props: &Properties) -> Result<(), RillError> {
        Ok(())
    }

    async fn open(&self) -> Result<(), RillError> {
        Ok(())
    }

    async fn collect(&self, item: serde_json::Value) -> Result<(), RillError> {
        self.collected.fetch_add(1, Ordering::Relaxed);
        info!(item = %item, "sink item");
        Ok(())
    }

    async fn close(&self) -> Result<(), RillError> {
        info!(collected = self.collected(), "log sink closed");
        Ok(())
    }
}

/// Keeps collected items in memory. Register it as an instance to inspect
/// results after a pipeline run.
#[derive(Debug, Default)]
pub struct MemorySink {
    items: Mutex<Vec<serde_json::Value>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn items(&self) -> Vec<serde_json::Value> {
        self.items.lock().await.clone()
    }
}

#[async_trait]
impl Sink for MemorySink {
    fn configure(&self, _props: &Properties) -> Result<(), RillError> {
        Ok(())
    }

    async fn open(&self) -> Result<(), RillError> {
        Ok(())
    }

    async fn collect(&self, item: serde_json::Value) -> Result<(), RillError> {
        self.items.lock().await.push(item);
        Ok(())
    }

    async fn close(&self) -> Result<(), RillError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn log_sink_counts_and_logs() {
        let sink = LogSink::new();
        sink.open().await.unwrap();
        sink.collect(json!({"msg": "hello"})).await.unwrap();
        sink.collect(json!({"msg": "world"})).await.unwrap();
        sink.close().await.unwrap();

        assert_eq!(sink.collected(), 2);
        assert!(logs_contain("hello"));
        assert!(logs_contain("log sink closed"));
    }

    #[tokio::test]
    async fn memory_sink_keeps_items_in_order() {
        let sink = MemorySink::new();
        sink.collect(json!(1)).await.unwrap();
        sink.collect(json!(2)).await.unwrap();
        assert_eq!(sink.items().await, vec![json!(1), json!(2)]);
    }
}
