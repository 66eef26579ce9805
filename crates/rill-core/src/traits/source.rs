// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source extension point.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::RillError;
use crate::types::{Properties, SourceTuple};

/// A data source feeding tuples into a pipeline.
#[async_trait]
pub trait Source: Send + Sync + 'static {
    /// Applies the datasource name and properties from the pipeline configuration.
    fn configure(&self, datasource: &str, props: &Properties) -> Result<(), RillError>;

    /// Emits tuples into `consumer` until the source is exhausted or closed.
    ///
    /// Returns once no more tuples will be produced.
    async fn open(&self, consumer: mpsc::Sender<SourceTuple>) -> Result<(), RillError>;

    /// Releases any held resources.
    async fn close(&self) -> Result<(), RillError>;
}
