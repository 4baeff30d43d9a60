//! Error handling for codec operations
//!
//! This module re-exports the error types used throughout the crate.
//! It uses thiserror for ergonomic error handling with one variant per
//! fatal decode condition.

pub use crate::common::CodecError;
pub use crate::common::Result;
