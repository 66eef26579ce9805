// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Function extension point.

use serde_json::Value;

use crate::error::RillError;

/// A transformation function callable from a pipeline step.
pub trait Function: Send + Sync + 'static {
    /// Checks the call's arguments at pipeline-build time.
    fn validate(&self, args: &[Value]) -> Result<(), RillError>;

    /// Evaluates the function for one tuple.
    fn exec(&self, args: &[Value]) -> Result<Value, RillError>;

    /// Whether the function aggregates over a window rather than a single tuple.
    fn is_aggregate(&self) -> bool {
        false
    }
}
