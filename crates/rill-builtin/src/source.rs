// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory source.

use std::sync::Mutex;

use async_trait::async_trait;
use rill_core::{Properties, RillError, Source, SourceTuple};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;

/// Emits the JSON objects listed in the `data` property, once per `open`.
///
/// Each tuple's metadata records the configured datasource.
#[derive(Default)]
pub struct MemorySource {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    datasource: String,
    rows: Vec<Properties>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Source for MemorySource {
    fn configure(&self, datasource: &str, props: &Properties) -> Result<(), RillError> {
        let rows = match props.get("data") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Object(row) => Ok(row.clone()),
                    other => Err(RillError::Config(format!(
                        "memory source: every `data` entry must be an object, got {other}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(RillError::Config(format!(
                    "memory source: `data` must be an array, got {other}"
                )));
            }
        };

        let mut state = self
            .state
            .lock()
            .map_err(|_| RillError::Internal("memory source state poisoned".into()))?;
        state.datasource = datasource.to_string();
        state.rows = rows;
        Ok(())
    }

    async fn open(&self, consumer: mpsc::Sender<SourceTuple>) -> Result<(), RillError> {
        let (datasource, rows) = {
            let state = self
                .state
                .lock()
                .map_err(|_| RillError::Internal("memory source state poisoned".into()))?;
            (state.datasource.clone(), state.rows.clone())
        };
        debug!(datasource = %datasource, rows = rows.len(), "memory source opened");

        for row in rows {
            let tuple =
                SourceTuple::new(row).with_meta("datasource", Value::String(datasource.clone()));
            consumer.send(tuple).await.map_err(|e| RillError::Source {
                message: "consumer dropped before memory source finished".into(),
                source: Some(Box::new(e)),
            })?;
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), RillError> {
        Ok(())
    }
}
