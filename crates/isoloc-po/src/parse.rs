//! Line-based parser for the PO subset used by the ISO 4217 catalogues.
//!
//! The subset covers comment lines (`#`, `#.`, `#,`, `#:`), `msgid`,
//! `msgstr`, and adjacent quoted continuation lines.  Plural forms and
//! obsolete entries are outside the subset and rejected at load time.

use std::mem;

use isoloc_core::{Error, Result};

use crate::message::{Comment, Message};
use crate::quoting::unescape;

/// A parsed entry plus the line its `msgid` keyword appeared on.
///
/// The line number is used by the catalogue builder to report duplicate
/// keys with a position.
#[derive(Debug)]
pub(crate) struct RawEntry {
    pub message: Message,
    pub msgid_line: usize,
}

enum Section {
    Idle,
    MsgId,
    MsgStr,
}

/// Strip the surrounding double quotes from `s` and unescape the contents.
fn unquote(s: &str, line: usize) -> Result<String> {
    let s = s.trim();
    if s.len() < 2 || !s.starts_with('"') || !s.ends_with('"') {
        return Err(Error::Parse {
            line,
            message: format!("expected a double-quoted string, got {s:?}"),
        });
    }
    unescape(&s[1..s.len() - 1], line)
}

/// Split a comment line into its body, requiring a single space (or
/// nothing) after the marker so that serialization is reversible.
fn comment_body<'a>(rest: &'a str, marker: &str, line: usize) -> Result<&'a str> {
    if rest.is_empty() {
        Ok(rest)
    } else if let Some(body) = rest.strip_prefix(' ') {
        Ok(body)
    } else {
        Err(Error::Parse {
            line,
            message: format!("expected a space after {marker:?}"),
        })
    }
}

fn flush(
    entries: &mut Vec<RawEntry>,
    comments: &mut Vec<Comment>,
    msgid: &mut String,
    msgstr: &mut String,
    msgid_line: usize,
) {
    entries.push(RawEntry {
        message: Message {
            comments: mem::take(comments),
            msgid: mem::take(msgid),
            msgstr: mem::take(msgstr),
        },
        msgid_line,
    });
}

/// Parse catalogue source into raw entries, header included.
pub(crate) fn parse_messages(src: &str) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::new();
    let mut comments: Vec<Comment> = Vec::new();
    let mut msgid = String::new();
    let mut msgstr = String::new();
    let mut msgid_line = 0;
    let mut section = Section::Idle;
    let mut last_line = 0;

    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.is_empty() {
            match section {
                Section::MsgStr => {
                    flush(&mut entries, &mut comments, &mut msgid, &mut msgstr, msgid_line);
                    section = Section::Idle;
                }
                Section::MsgId => {
                    return Err(Error::Parse {
                        line: line_no,
                        message: "msgid without a following msgstr".into(),
                    });
                }
                Section::Idle if !comments.is_empty() => {
                    return Err(Error::Parse {
                        line: line_no,
                        message: "comment not attached to an entry".into(),
                    });
                }
                Section::Idle => {}
            }
        } else if let Some(rest) = line.strip_prefix('#') {
            if matches!(section, Section::MsgStr) {
                flush(&mut entries, &mut comments, &mut msgid, &mut msgstr, msgid_line);
                section = Section::Idle;
            } else if matches!(section, Section::MsgId) {
                return Err(Error::Parse {
                    line: line_no,
                    message: "comment between msgid and msgstr".into(),
                });
            }
            let comment = if let Some(rest) = rest.strip_prefix('.') {
                Comment::Extracted(comment_body(rest, "#.", line_no)?.to_owned())
            } else if let Some(rest) = rest.strip_prefix(',') {
                Comment::Flags(comment_body(rest, "#,", line_no)?.to_owned())
            } else if let Some(rest) = rest.strip_prefix(':') {
                Comment::Reference(comment_body(rest, "#:", line_no)?.to_owned())
            } else if rest.starts_with('~') {
                return Err(Error::Parse {
                    line: line_no,
                    message: "obsolete entries (#~) are not supported".into(),
                });
            } else if rest.starts_with('|') {
                return Err(Error::Parse {
                    line: line_no,
                    message: "previous-string comments (#|) are not supported".into(),
                });
            } else {
                Comment::Translator(comment_body(rest, "#", line_no)?.to_owned())
            };
            comments.push(comment);
        } else if line.starts_with("msgid_plural") || line.starts_with("msgstr[") {
            return Err(Error::Parse {
                line: line_no,
                message: "plural entries are not supported".into(),
            });
        } else if let Some(rest) = line.strip_prefix("msgid") {
            match section {
                Section::MsgStr => {
                    flush(&mut entries, &mut comments, &mut msgid, &mut msgstr, msgid_line);
                }
                Section::MsgId => {
                    return Err(Error::Parse {
                        line: line_no,
                        message: "msgid without a following msgstr".into(),
                    });
                }
                Section::Idle => {}
            }
            msgid = unquote(rest, line_no)?;
            msgid_line = line_no;
            section = Section::MsgId;
        } else if let Some(rest) = line.strip_prefix("msgstr") {
            if !matches!(section, Section::MsgId) {
                return Err(Error::Parse {
                    line: line_no,
                    message: "msgstr without a preceding msgid".into(),
                });
            }
            msgstr = unquote(rest, line_no)?;
            section = Section::MsgStr;
        } else if line.starts_with('"') {
            let chunk = unquote(line, line_no)?;
            match section {
                Section::MsgId => msgid.push_str(&chunk),
                Section::MsgStr => msgstr.push_str(&chunk),
                Section::Idle => {
                    return Err(Error::Parse {
                        line: line_no,
                        message: "continuation string outside an entry".into(),
                    });
                }
            }
        } else {
            return Err(Error::Parse {
                line: line_no,
                message: format!("unrecognized line: {line:?}"),
            });
        }
    }

    match section {
        Section::MsgStr => {
            flush(&mut entries, &mut comments, &mut msgid, &mut msgstr, msgid_line);
        }
        Section::MsgId => {
            return Err(Error::Parse {
                line: last_line,
                message: "msgid without a following msgstr".into(),
            });
        }
        Section::Idle if !comments.is_empty() => {
            return Err(Error::Parse {
                line: last_line,
                message: "comment not attached to an entry".into(),
            });
        }
        Section::Idle => {}
    }

    Ok(entries)
}
