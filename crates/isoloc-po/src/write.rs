//! Canonical serializer for the PO subset.
//!
//! The writer emits one blank line between entries, multi-line strings as
//! an empty first string followed by one quoted line per `\n`-terminated
//! segment, and comment markers followed by a single space.  Parsing a
//! catalogue in this canonical form and re-serializing it reproduces the
//! input byte for byte.

use crate::message::{Comment, Message};
use crate::quoting::escape;

fn push_comment(out: &mut String, marker: &str, text: &str) {
    out.push_str(marker);
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }
    out.push('\n');
}

fn push_field(out: &mut String, keyword: &str, value: &str) {
    if value.contains('\n') {
        // Header-style block: empty first string, one quoted line per
        // newline-terminated segment.
        out.push_str(keyword);
        out.push_str(" \"\"\n");
        for segment in value.split_inclusive('\n') {
            out.push('"');
            out.push_str(&escape(segment));
            out.push_str("\"\n");
        }
    } else {
        out.push_str(keyword);
        out.push_str(" \"");
        out.push_str(&escape(value));
        out.push_str("\"\n");
    }
}

/// Append one entry (comments, `msgid`, `msgstr`) to `out`.
pub(crate) fn push_message(out: &mut String, message: &Message) {
    for comment in &message.comments {
        match comment {
            Comment::Translator(text) => push_comment(out, "#", text),
            Comment::Extracted(text) => push_comment(out, "#.", text),
            Comment::Flags(text) => push_comment(out, "#,", text),
            Comment::Reference(text) => push_comment(out, "#:", text),
        }
    }
    push_field(out, "msgid", &message.msgid);
    push_field(out, "msgstr", &message.msgstr);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_entry() {
        let mut m = Message::new("Euro", "евро");
        m.comments.push(Comment::Extracted("EUR".into()));
        let mut out = String::new();
        push_message(&mut out, &m);
        assert_eq!(out, "#. EUR\nmsgid \"Euro\"\nmsgstr \"евро\"\n");
    }

    #[test]
    fn header_entry_uses_continuation_lines() {
        let m = Message::new("", "Language: sr\nMIME-Version: 1.0\n");
        let mut out = String::new();
        push_message(&mut out, &m);
        assert_eq!(
            out,
            "msgid \"\"\nmsgstr \"\"\n\"Language: sr\\n\"\n\"MIME-Version: 1.0\\n\"\n"
        );
    }

    #[test]
    fn empty_translator_comment_has_no_trailing_space() {
        let mut m = Message::new("a", "b");
        m.comments.push(Comment::Translator(String::new()));
        let mut out = String::new();
        push_message(&mut out, &m);
        assert!(out.starts_with("#\n"));
    }
}
