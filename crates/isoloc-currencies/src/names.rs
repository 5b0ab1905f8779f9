//! The currency-name table and its lookup operations.

use std::sync::OnceLock;

use isoloc_core::Result;
use isoloc_po::Catalogue;

use crate::annotation::{parse_annotation, CodeRef};

/// A read-only table of localized ISO 4217 currency names.
///
/// Built once from a catalogue; lookups follow the gettext convention of
/// returning the English name unchanged when no translation exists.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyNames {
    catalogue: Catalogue,
}

/// One entry together with its parsed code annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedName<'a> {
    /// The English currency name (the lookup key).
    pub english: &'a str,
    /// The localized rendering.
    pub localized: &'a str,
    /// Codes the name applies to; empty when the entry carries no
    /// well-formed annotation.
    pub codes: Vec<CodeRef>,
}

impl CurrencyNames {
    /// Parse catalogue source text into a name table.
    pub fn parse(src: &str) -> Result<Self> {
        Ok(Self {
            catalogue: Catalogue::parse(src)?,
        })
    }

    /// Wrap an already-parsed catalogue.
    pub fn from_catalogue(catalogue: Catalogue) -> Self {
        Self { catalogue }
    }

    /// Exact-match lookup of the localized name.
    pub fn get(&self, english: &str) -> Option<&str> {
        self.catalogue.get(english)
    }

    /// Localize a currency name, falling back to the input for unknown
    /// names.  Never fails.
    pub fn localize<'a>(&'a self, english: &'a str) -> &'a str {
        self.catalogue.gettext(english)
    }

    /// All `(english, localized)` pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.catalogue
            .messages()
            .iter()
            .map(|m| (m.msgid.as_str(), m.msgstr.as_str()))
    }

    /// All entries with their parsed code annotations.
    pub fn annotated_entries(&self) -> impl Iterator<Item = AnnotatedName<'_>> {
        self.catalogue.messages().iter().map(|m| AnnotatedName {
            english: &m.msgid,
            localized: &m.msgstr,
            codes: m
                .annotation()
                .and_then(parse_annotation)
                .unwrap_or_default(),
        })
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.catalogue.len()
    }

    /// Return `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.catalogue.is_empty()
    }

    /// The underlying catalogue (header metadata, raw entries).
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}

static SERBIAN: OnceLock<CurrencyNames> = OnceLock::new();

/// The Serbian currency-name table, loaded from the embedded catalogue on
/// first use and shared process-wide.
pub fn serbian() -> &'static CurrencyNames {
    SERBIAN.get_or_init(|| {
        CurrencyNames::parse(crate::SERBIAN_PO).expect("embedded Serbian catalogue is well-formed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serbian_is_loaded_once() {
        let a = serbian() as *const CurrencyNames;
        let b = serbian() as *const CurrencyNames;
        assert_eq!(a, b);
    }

    #[test]
    fn localize_known_name() {
        assert_eq!(serbian().localize("Euro"), "евро");
    }

    #[test]
    fn localize_unknown_name_falls_back() {
        assert_eq!(serbian().localize("Galactic Credit"), "Galactic Credit");
        assert_eq!(serbian().get("Galactic Credit"), None);
    }

    #[test]
    fn entries_iterate_in_file_order() {
        let first = serbian().entries().next().unwrap();
        assert_eq!(first, ("Andorran Peseta", "андорска пезета"));
    }
}
