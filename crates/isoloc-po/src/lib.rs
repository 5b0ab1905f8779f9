//! # isoloc-po
//!
//! A reader and writer for the PO message-catalogue subset used by the
//! ISO localization data files: header metadata, comment lines, `msgid`
//! / `msgstr` pairs with quoted continuation lines.
//!
//! Catalogues are immutable after [`Catalogue::parse`]; lookups follow the
//! gettext convention of falling back to the source text for unknown keys.
//!
//! ```rust
//! use isoloc_po::Catalogue;
//!
//! let cat = Catalogue::parse(
//!     "msgid \"\"\nmsgstr \"Language: sr\\n\"\n\nmsgid \"Euro\"\nmsgstr \"евро\"\n",
//! )?;
//! assert_eq!(cat.gettext("Euro"), "евро");
//! assert_eq!(cat.gettext("Unknown"), "Unknown");
//! # Ok::<(), isoloc_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The immutable catalogue and its lookup operations.
pub mod catalogue;

/// Header metadata fields.
pub mod header;

/// The entry model: messages and comments.
pub mod message;

/// String escaping rules.
pub mod quoting;

mod parse;
mod write;

pub use catalogue::Catalogue;
pub use header::Header;
pub use message::{Comment, Message};
