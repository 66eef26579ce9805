// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sink extension point.

use async_trait::async_trait;

use crate::error::RillError;
use crate::types::Properties;

/// A data sink receiving the results of a pipeline.
#[async_trait]
pub trait Sink: Send + Sync + 'static {
    /// Applies the properties from the pipeline configuration.
    fn configure(&self, props: &Properties) -> Result<(), RillError>;

    /// Prepares the sink to accept items.
    async fn open(&self) -> Result<(), RillError>;

    /// Delivers one result item.
    async fn collect(&self, item: serde_json::Value) -> Result<(), RillError>;

    /// Flushes and releases any held resources.
    async fn close(&self) -> Result<(), RillError>;
}
