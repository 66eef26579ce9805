// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits for the three extension-point kinds.
//!
//! Every method takes `&self` so a single instance can be shared behind an
//! `Arc` by every resolution of its registered name.

pub mod function;
pub mod sink;
pub mod source;

pub use function::Function;
pub use sink::Sink;
pub use source::Source;
