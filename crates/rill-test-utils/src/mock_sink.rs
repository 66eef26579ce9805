// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock sink capturing collected items.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rill_core::{Properties, RillError, Sink};
use tokio::sync::Mutex;

/// A sink that records every item it receives and whether it was closed.
pub struct MockSink {
    id: usize,
    items: Mutex<Vec<serde_json::Value>>,
    closed: AtomicBool,
    fail_collect: bool,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            id: crate::next_id(),
            items: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
            fail_collect: false,
        }
    }

    /// A sink whose `collect` always fails.
    pub fn failing() -> Self {
        Self {
            fail_collect: true,
            ..Self::new()
        }
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Everything collected so far.
    pub async fn items(&self) -> Vec<serde_json::Value> {
        self.items.lock().await.clone()
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Sink for MockSink {
    fn configure(&self, _props: &Properties) -> Result<(), RillError> {
        Ok(())
    }

    async fn open(&self) -> Result<(), RillError> {
        Ok(())
    }

    async fn collect(&self, item: serde_json::Value) -> Result<(), RillError> {
        if self.fail_collect {
            return Err(RillError::Sink {
                message: "mock sink rejects every item".to_string(),
                source: None,
            });
        }
        self.items.lock().await.push(item);
        Ok(())
    }

    async fn close(&self) -> Result<(), RillError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
