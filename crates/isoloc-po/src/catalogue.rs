//! The message catalogue: an immutable `msgid` → `msgstr` table.
//!
//! A catalogue is built once by [`Catalogue::parse`] and never mutated.
//! Integrity problems (malformed entries, duplicate keys, missing header)
//! are reported at load time; lookups never fail.  `&Catalogue` can be
//! shared freely across threads.

use std::collections::HashMap;

use isoloc_core::{Error, Result};

use crate::header::Header;
use crate::message::Message;
use crate::parse::parse_messages;
use crate::write::push_message;

/// An immutable message catalogue loaded from PO-format text.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    header_message: Message,
    header: Header,
    messages: Vec<Message>,
    index: HashMap<String, usize>,
}

impl Catalogue {
    /// Parse catalogue source text.
    ///
    /// # Errors
    ///
    /// - [`Error::Parse`] for a malformed line,
    /// - [`Error::MissingHeader`] when the first entry is not the header,
    /// - [`Error::Header`] when a header metadata field is malformed,
    /// - [`Error::DuplicateKey`] when a `msgid` appears twice.
    pub fn parse(src: &str) -> Result<Self> {
        let mut entries = parse_messages(src)?.into_iter();

        let header_message = match entries.next() {
            Some(entry) if entry.message.is_header() => entry.message,
            _ => return Err(Error::MissingHeader),
        };
        let header = Header::parse(&header_message.msgstr)?;

        let mut messages = Vec::new();
        let mut index = HashMap::new();
        for entry in entries {
            if entry.message.is_header() {
                return Err(Error::Parse {
                    line: entry.msgid_line,
                    message: "unexpected second header entry".into(),
                });
            }
            if index
                .insert(entry.message.msgid.clone(), messages.len())
                .is_some()
            {
                return Err(Error::DuplicateKey {
                    key: entry.message.msgid,
                    line: entry.msgid_line,
                });
            }
            messages.push(entry.message);
        }

        Ok(Self {
            header_message,
            header,
            messages,
            index,
        })
    }

    /// The parsed header metadata.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The raw header entry, comments included.
    pub fn header_message(&self) -> &Message {
        &self.header_message
    }

    /// All entries in file order, header excluded.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of entries, header excluded.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Return `true` if the catalogue has no entries beyond the header.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Exact-match lookup of a translation.
    pub fn get(&self, msgid: &str) -> Option<&str> {
        self.index
            .get(msgid)
            .map(|&i| self.messages[i].msgstr.as_str())
    }

    /// Lookup with the gettext fallback convention: an unknown key is
    /// returned unchanged.
    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.get(msgid).unwrap_or(msgid)
    }

    /// Serialize back to canonical PO text.
    ///
    /// Parsing the result yields an equal catalogue; for input already in
    /// canonical form the output is byte-identical.
    pub fn to_po_string(&self) -> String {
        let mut out = String::new();
        push_message(&mut out, &self.header_message);
        for message in &self.messages {
            out.push('\n');
            push_message(&mut out, message);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
# Test catalogue.
msgid \"\"
msgstr \"\"
\"Project-Id-Version: test 1.0\\n\"
\"Language: sr\\n\"
\"Content-Type: text/plain; charset=UTF-8\\n\"

#. EUR
msgid \"Euro\"
msgstr \"\u{0435}\u{0432}\u{0440}\u{043e}\"

#. CHF
msgid \"Swiss Franc\"
msgstr \"\u{0448}\u{0432}\u{0430}\u{0458}\u{0446}\u{0430}\u{0440}\u{0441}\u{043a}\u{0438} \u{0444}\u{0440}\u{0430}\u{043d}\u{0430}\u{043a}\"
";

    #[test]
    fn parses_header_and_entries() {
        let cat = Catalogue::parse(SMALL).unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.header().language(), Some("sr"));
        assert_eq!(cat.header().charset(), Some("UTF-8"));
    }

    #[test]
    fn exact_lookup() {
        let cat = Catalogue::parse(SMALL).unwrap();
        assert_eq!(cat.get("Euro"), Some("евро"));
        assert_eq!(cat.get("Zorkmid"), None);
    }

    #[test]
    fn gettext_falls_back_to_the_key() {
        let cat = Catalogue::parse(SMALL).unwrap();
        assert_eq!(cat.gettext("Swiss Franc"), "швајцарски франак");
        assert_eq!(cat.gettext("Zorkmid"), "Zorkmid");
    }

    #[test]
    fn round_trip_is_byte_identical() {
        let cat = Catalogue::parse(SMALL).unwrap();
        assert_eq!(cat.to_po_string(), SMALL);
    }

    #[test]
    fn reparse_equals_original() {
        let cat = Catalogue::parse(SMALL).unwrap();
        assert_eq!(Catalogue::parse(&cat.to_po_string()).unwrap(), cat);
    }

    #[test]
    fn duplicate_msgid_is_rejected() {
        let src = format!("{SMALL}\n#. EUR\nmsgid \"Euro\"\nmsgstr \"x\"\n");
        assert!(matches!(
            Catalogue::parse(&src),
            Err(Error::DuplicateKey { key, .. }) if key == "Euro"
        ));
    }

    #[test]
    fn missing_header_is_rejected() {
        let src = "msgid \"Euro\"\nmsgstr \"евро\"\n";
        assert_eq!(Catalogue::parse(src), Err(Error::MissingHeader));
    }

    #[test]
    fn second_header_is_rejected() {
        let src = format!("{SMALL}\nmsgid \"\"\nmsgstr \"Language: de\\n\"\n");
        assert!(matches!(
            Catalogue::parse(&src),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn empty_catalogue_has_header_only() {
        let src = "msgid \"\"\nmsgstr \"Language: sr\\n\"\n";
        let cat = Catalogue::parse(src).unwrap();
        assert!(cat.is_empty());
        assert_eq!(cat.len(), 0);
    }
}
