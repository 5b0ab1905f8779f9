//! Escaping rules for quoted PO strings.
//!
//! The subset understood here covers the sequences the ISO 4217 catalogues
//! use: `\\`, `\"`, `\n`, and `\t`.

use isoloc_core::{Error, Result};

/// Escape a string for inclusion between double quotes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverse [`escape`].
///
/// `line` is the 1-based source line, used for error reporting.  A raw
/// (unescaped) double quote or an unknown/dangling escape sequence is a
/// parse error.
pub fn unescape(s: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => {
                    return Err(Error::Parse {
                        line,
                        message: format!("unknown escape sequence \\{other}"),
                    })
                }
                None => {
                    return Err(Error::Parse {
                        line,
                        message: "dangling backslash at end of string".into(),
                    })
                }
            },
            '"' => {
                return Err(Error::Parse {
                    line,
                    message: "unescaped double quote inside string".into(),
                })
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_specials() {
        assert_eq!(escape("a\nb"), "a\\nb");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape("back\\slash\ttab"), "back\\\\slash\\ttab");
    }

    #[test]
    fn unescape_specials() {
        assert_eq!(unescape("a\\nb", 1), Ok("a\nb".into()));
        assert_eq!(unescape("say \\\"hi\\\"", 1), Ok("say \"hi\"".into()));
    }

    #[test]
    fn unescape_rejects_bad_input() {
        assert!(unescape("bad \\q", 3).is_err());
        assert!(unescape("dangling\\", 3).is_err());
        assert!(unescape("raw \" quote", 3).is_err());
    }

    #[test]
    fn cyrillic_passes_through() {
        assert_eq!(escape("швајцарски франак"), "швајцарски франак");
        assert_eq!(
            unescape("швајцарски франак", 1),
            Ok("швајцарски франак".into())
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn escape_unescape_round_trip(s in any::<String>()) {
                let escaped = escape(&s);
                prop_assert_eq!(unescape(&escaped, 1), Ok(s));
            }

            #[test]
            fn escaped_specials_round_trip(s in "[\\PC\\n\\t\"\\\\]*") {
                let escaped = escape(&s);
                prop_assert!(!escaped.contains('\n'));
                prop_assert_eq!(unescape(&escaped, 1), Ok(s));
            }
        }
    }
}
