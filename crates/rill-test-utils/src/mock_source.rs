// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock source for deterministic testing.

use std::sync::Mutex;

use async_trait::async_trait;
use rill_core::{Properties, RillError, Source, SourceTuple};
use tokio::sync::mpsc;

/// A source that emits a pre-configured list of tuples once per `open`.
pub struct MockSource {
    id: usize,
    tuples: Vec<SourceTuple>,
    datasource: Mutex<Option<String>>,
}

impl MockSource {
    /// Create a mock source with no tuples.
    pub fn new() -> Self {
        Self::with_tuples(Vec::new())
    }

    /// Create a mock source pre-loaded with the given tuples.
    pub fn with_tuples(tuples: Vec<SourceTuple>) -> Self {
        Self {
            id: crate::next_id(),
            tuples,
            datasource: Mutex::new(None),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// The datasource passed to the last `configure` call.
    pub fn datasource(&self) -> Option<String> {
        self.datasource
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for MockSource {
    fn configure(&self, datasource: &str, _props: &Properties) -> Result<(), RillError> {
        *self.datasource.lock().unwrap_or_else(|e| e.into_inner()) = Some(datasource.to_string());
        Ok(())
    }

    async fn open(&self, consumer: mpsc::Sender<SourceTuple>) -> Result<(), RillError> {
        for tuple in &self.tuples {
            consumer
                .send(tuple.clone())
                .await
                .map_err(|_| RillError::Source {
                    message: "consumer closed".to_string(),
                    source: None,
                })?;
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), RillError> {
        Ok(())
    }
}
