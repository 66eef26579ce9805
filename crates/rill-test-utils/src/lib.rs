// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Rill registry and pipeline tests.
//!
//! # Components
//!
//! - [`MockSource`] - Source emitting a fixed list of tuples
//! - [`MockSink`] - Sink capturing every collected item
//! - [`MockFunction`] - Identity function over its first argument
//! - [`RecordingObserver`] - Registry observer remembering every event
//!
//! Every mock carries a process-unique `id()` so tests can tell instances apart.

pub mod mock_function;
pub mod mock_sink;
pub mod mock_source;
pub mod observer;

pub use mock_function::MockFunction;
pub use mock_sink::MockSink;
pub use mock_source::MockSource;
pub use observer::RecordingObserver;

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

pub(crate) fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
