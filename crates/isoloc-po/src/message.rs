//! The catalogue entry model: comments and messages.

/// A single comment line attached to a message.
///
/// The leading marker (`#`, `#.`, `#,`, `#:`) is stripped; the text is kept
/// verbatim so that serialization reproduces the original line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comment {
    /// Translator comment (`# …`), free text written by the translator.
    Translator(String),
    /// Extracted comment (`#. …`), context supplied by the upstream source.
    ///
    /// In the ISO 4217 catalogues this names the alphabetic code(s) a
    /// currency name applies to, with withdrawal markers for historical
    /// codes.
    Extracted(String),
    /// Flags comment (`#, …`), e.g. `fuzzy`.
    Flags(String),
    /// Reference comment (`#: …`), source locations of the string.
    Reference(String),
}

/// One catalogue entry: a source string, its translation, and its comments.
///
/// `msgid` is the lookup key and must be unique within a catalogue.  The
/// entry with an empty `msgid` is the header; its `msgstr` holds the
/// `Key: value` metadata lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Comment lines preceding the entry, in file order.
    pub comments: Vec<Comment>,
    /// The source-language string (lookup key).
    pub msgid: String,
    /// The translated string.
    pub msgstr: String,
}

impl Message {
    /// Create an entry with no comments.
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Self {
            comments: Vec::new(),
            msgid: msgid.into(),
            msgstr: msgstr.into(),
        }
    }

    /// Return the first extracted comment (`#.`), if any.
    ///
    /// This is the annotation slot used by the ISO 4217 catalogues.
    pub fn annotation(&self) -> Option<&str> {
        self.comments.iter().find_map(|c| match c {
            Comment::Extracted(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Return `true` if this is a header entry (empty `msgid`).
    pub fn is_header(&self) -> bool {
        self.msgid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_picks_first_extracted() {
        let mut m = Message::new("Euro", "евро");
        m.comments.push(Comment::Translator("checked".into()));
        m.comments.push(Comment::Extracted("EUR".into()));
        assert_eq!(m.annotation(), Some("EUR"));
    }

    #[test]
    fn header_detection() {
        assert!(Message::new("", "Language: sr\n").is_header());
        assert!(!Message::new("Euro", "евро").is_header());
    }
}
