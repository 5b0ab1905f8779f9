//! Parsing of the extracted-comment annotation carried by each entry.
//!
//! The annotation lists the ISO 4217 alphabetic code(s) a currency name
//! applies to, e.g.:
//!
//! ```text
//! EUR
//! RSD; CSD, withdrawn in 2006-10
//! MMK; BUK, withdrawn, date unknown
//! ```
//!
//! Annotations are metadata only; they are never consulted at lookup time.

/// Withdrawal status of a historical code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Withdrawal {
    /// Withdrawn in the given `YYYY-MM` month.
    Date(String),
    /// Withdrawn at an unrecorded date.
    Unknown,
}

/// One alphabetic code referenced by an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRef {
    /// The ISO 4217 alphabetic code (three uppercase letters).
    pub code: String,
    /// `None` for active codes.
    pub withdrawal: Option<Withdrawal>,
}

impl CodeRef {
    /// Return `true` if the code is no longer in active use.
    pub fn is_withdrawn(&self) -> bool {
        self.withdrawal.is_some()
    }
}

fn parse_code(code: &str) -> Option<String> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Some(code.to_owned())
    } else {
        None
    }
}

fn parse_segment(segment: &str) -> Option<CodeRef> {
    match segment.split_once(", ") {
        None => Some(CodeRef {
            code: parse_code(segment)?,
            withdrawal: None,
        }),
        Some((code, status)) => {
            let withdrawal = if let Some(date) = status.strip_prefix("withdrawn in ") {
                Withdrawal::Date(date.to_owned())
            } else if status == "withdrawn, date unknown" {
                Withdrawal::Unknown
            } else {
                return None;
            };
            Some(CodeRef {
                code: parse_code(code)?,
                withdrawal: Some(withdrawal),
            })
        }
    }
}

/// Parse an annotation into its code references.
///
/// Returns `None` if the text does not follow the annotation grammar.
pub fn parse_annotation(text: &str) -> Option<Vec<CodeRef>> {
    let mut refs = Vec::new();
    for segment in text.split("; ") {
        refs.push(parse_segment(segment)?);
    }
    Some(refs)
}
