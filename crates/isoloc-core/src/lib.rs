//! # isoloc-core
//!
//! Core error definitions shared across the isoloc-rs workspace — the error
//! hierarchy and the `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
