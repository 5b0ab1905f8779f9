//! # isoloc-currencies
//!
//! Localized ISO 4217 currency-name catalogues.
//!
//! The crate embeds the Serbian catalogue (`data/sr.po`, Cyrillic script)
//! and exposes it as a process-wide, read-only name table:
//!
//! ```rust
//! use isoloc_currencies::serbian;
//!
//! assert_eq!(serbian().localize("US Dollar"), "амерички долар");
//! // Unknown names fall back to the English original.
//! assert_eq!(serbian().localize("Doubloon"), "Doubloon");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Code-reference annotations (`#.` comments) and their grammar.
pub mod annotation;

/// The currency-name table and lookup operations.
pub mod names;

/// The embedded Serbian catalogue, byte for byte.
pub const SERBIAN_PO: &str = include_str!("../data/sr.po");

pub use annotation::{parse_annotation, CodeRef, Withdrawal};
pub use names::{serbian, AnnotatedName, CurrencyNames};
