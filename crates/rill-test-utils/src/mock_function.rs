// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock function returning its first argument.

use rill_core::{Function, RillError};
use serde_json::Value;

/// Identity function. Requires at least one argument.
pub struct MockFunction {
    id: usize,
}

impl MockFunction {
    pub fn new() -> Self {
        Self {
            id: crate::next_id(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

impl Default for MockFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl Function for MockFunction {
    fn validate(&self, args: &[Value]) -> Result<(), RillError> {
        if args.is_empty() {
            return Err(RillError::function("mock", "expects at least one argument"));
        }
        Ok(())
    }

    fn exec(&self, args: &[Value]) -> Result<Value, RillError> {
        self.validate(args)?;
        Ok(args[0].clone())
    }
}
