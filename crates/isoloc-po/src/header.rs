//! The catalogue header: metadata fields carried by the empty-`msgid` entry.
//!
//! The header `msgstr` is a block of `Key: value` lines.  Field order is
//! preserved so that serialization reproduces the original block.

use isoloc_core::{Error, Result};

/// Parsed view of the header entry's metadata fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    fields: Vec<(String, String)>,
}

impl Header {
    /// Parse the header `msgstr` block.
    ///
    /// Every non-empty line must have the form `Key: value`.  A trailing
    /// newline on the block is expected (each field line ends in `\n`).
    pub fn parse(msgstr: &str) -> Result<Self> {
        let mut fields = Vec::new();
        for line in msgstr.lines() {
            if line.is_empty() {
                continue;
            }
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| Error::Header(format!("field line without colon: {line:?}")))?;
            if name.trim().is_empty() {
                return Err(Error::Header(format!("field line with empty name: {line:?}")));
            }
            fields.push((name.trim().to_owned(), value.trim().to_owned()));
        }
        if fields.is_empty() {
            return Err(Error::Header("header has no metadata fields".into()));
        }
        Ok(Self { fields })
    }

    /// Look up a field by name (case-sensitive, as in the file).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All fields in file order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// The `Project-Id-Version` field.
    pub fn project_id_version(&self) -> Option<&str> {
        self.get("Project-Id-Version")
    }

    /// The `PO-Revision-Date` field.
    pub fn revision_date(&self) -> Option<&str> {
        self.get("PO-Revision-Date")
    }

    /// The `Last-Translator` field.
    pub fn last_translator(&self) -> Option<&str> {
        self.get("Last-Translator")
    }

    /// The `Language-Team` field.
    pub fn language_team(&self) -> Option<&str> {
        self.get("Language-Team")
    }

    /// The `Language` field (BCP 47 / ISO 639 tag, e.g. `sr`).
    pub fn language(&self) -> Option<&str> {
        self.get("Language")
    }

    /// The character set declared in `Content-Type`
    /// (e.g. `UTF-8` out of `text/plain; charset=UTF-8`).
    pub fn charset(&self) -> Option<&str> {
        let content_type = self.get("Content-Type")?;
        content_type
            .split(';')
            .map(str::trim)
            .find_map(|part| part.strip_prefix("charset="))
    }
}
