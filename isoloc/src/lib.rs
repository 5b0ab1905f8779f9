//! # isoloc
//!
//! Localized ISO 4217 currency-name catalogues.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `isoloc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! isoloc = "0.1"
//! ```
//!
//! ```rust
//! use isoloc::currencies::serbian;
//!
//! assert_eq!(serbian().localize("Swiss Franc"), "швајцарски франак");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core error definitions.
pub use isoloc_core as core;

/// PO-subset message-catalogue model, parser, and writer.
pub use isoloc_po as po;

/// Localized ISO 4217 currency-name tables.
pub use isoloc_currencies as currencies;
