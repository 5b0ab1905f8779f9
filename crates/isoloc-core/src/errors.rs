//! Error types for isoloc-rs.
//!
//! All load-time failures of a message catalogue are represented by a single
//! `thiserror`-derived enum.  Catalogue integrity problems (malformed lines,
//! duplicate keys, missing header) are reported when the catalogue is
//! *loaded*; lookups never fail — an unknown key falls back to the source
//! text.  The `ensure!` and `fail!` macros are shorthands for precondition
//! checks and early error returns.

use thiserror::Error;

/// The top-level error type used throughout isoloc-rs.
///
/// Every variant describes a catalogue *load-time* integrity failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (maps to `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (maps to `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A line of catalogue text could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the catalogue source.
        line: usize,
        /// Description of what went wrong.
        message: String,
    },

    /// The same non-empty `msgid` appeared twice in one catalogue.
    #[error("duplicate msgid {key:?} at line {line}")]
    DuplicateKey {
        /// The offending key.
        key: String,
        /// 1-based line number of the second occurrence.
        line: usize,
    },

    /// The catalogue has no header entry (empty `msgid`) at its start.
    #[error("catalogue header entry is missing")]
    MissingHeader,

    /// The header entry exists but one of its metadata fields is malformed.
    #[error("header error: {0}")]
    Header(String),
}

/// Shorthand `Result` type used throughout isoloc-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use isoloc_core::{ensure, errors::Error};
/// fn non_empty(s: &str) -> isoloc_core::errors::Result<&str> {
///     ensure!(!s.is_empty(), "string must be non-empty");
///     Ok(s)
/// }
/// assert!(non_empty("x").is_ok());
/// assert!(non_empty("").is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use isoloc_core::{fail, errors::Error};
/// fn always_err() -> isoloc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let e = Error::Parse {
            line: 7,
            message: "expected msgstr".into(),
        };
        assert_eq!(e.to_string(), "parse error at line 7: expected msgstr");
    }

    #[test]
    fn duplicate_key_display() {
        let e = Error::DuplicateKey {
            key: "Euro".into(),
            line: 42,
        };
        assert_eq!(e.to_string(), "duplicate msgid \"Euro\" at line 42");
    }

    #[test]
    fn ensure_macro() {
        fn check(x: usize) -> Result<usize> {
            ensure!(x > 0, "x must be positive, got {x}");
            Ok(x)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(0),
            Err(Error::Precondition("x must be positive, got 0".into()))
        );
    }
}
