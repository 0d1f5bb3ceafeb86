// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The trivia skipper.
//!
//! Consumes, in priority order: runs of whitespace, `--` line comments,
//! and `/- ... -/` block comments. Block comments nest. A `/-` immediately
//! followed by `-` opens a documentation comment, which is a real token;
//! the skipper leaves it untouched.
//!
//! The skipper loops until a pass consumes no input, so the cursor it
//! returns is the true start of the next non-trivial token. Every pass
//! consumes at least one character, which bounds the loop by the remaining
//! input length.

use ecow::EcoString;

use super::cursor::Cursor;
use super::error::TokenError;
use super::token::Trivia;

/// Skips trivia starting at `start`, pushing each consumed piece onto
/// `sink`, and returns the cursor at the first non-trivia character.
///
/// # Errors
///
/// Returns [`TokenErrorKind::UnterminatedComment`] if input ends inside a
/// block comment. The error span starts at the outermost `/-`.
///
/// [`TokenErrorKind::UnterminatedComment`]: super::TokenErrorKind::UnterminatedComment
pub(crate) fn skip_trivia<'src>(
    start: Cursor<'src>,
    sink: &mut Vec<Trivia>,
) -> Result<Cursor<'src>, TokenError> {
    let mut cursor = start;
    loop {
        match cursor.peek() {
            Some(' ' | '\t' | '\r' | '\n') => {
                let ws_start = cursor;
                cursor = cursor.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
                sink.push(Trivia::Whitespace(EcoString::from(
                    cursor.text_from(ws_start),
                )));
            }
            Some('-') if cursor.starts_with("--") => {
                cursor = skip_line_comment(cursor, sink);
            }
            Some('/') if cursor.starts_with("/-") && !cursor.starts_with("/--") => {
                cursor = skip_block_comment(cursor, sink)?;
            }
            _ => break,
        }
    }
    Ok(cursor)
}

/// Skips a line comment: `-- ...` up to (not including) the newline.
///
/// The newline itself is picked up as whitespace on the next pass.
fn skip_line_comment<'src>(open: Cursor<'src>, sink: &mut Vec<Trivia>) -> Cursor<'src> {
    let cursor = open.advance_while(|c| c != '\n');
    sink.push(Trivia::LineComment(EcoString::from(cursor.text_from(open))));
    cursor
}

/// Skips a block comment: `/- ... -/`, tracking nesting with an explicit
/// counter rather than recursion, so adversarial nesting depth cannot grow
/// the stack.
fn skip_block_comment<'src>(
    open: Cursor<'src>,
    sink: &mut Vec<Trivia>,
) -> Result<Cursor<'src>, TokenError> {
    let mut cursor = open.advance_bytes(2); // /-
    let mut depth = 1usize;
    while depth > 0 {
        if cursor.at_end() {
            return Err(TokenError::unterminated_comment(cursor.span_from(open)));
        }
        if cursor.starts_with("-/") {
            depth -= 1;
            cursor = cursor.advance_bytes(2);
        } else if cursor.starts_with("/-") {
            depth += 1;
            cursor = cursor.advance_bytes(2);
        } else {
            cursor = cursor.bump();
        }
    }
    sink.push(Trivia::BlockComment(EcoString::from(
        cursor.text_from(open),
    )));
    Ok(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::TokenErrorKind;

    fn skip(input: &str) -> (usize, Vec<Trivia>) {
        let mut sink = Vec::new();
        let cursor = skip_trivia(Cursor::new(input), &mut sink).unwrap();
        (cursor.offset(), sink)
    }

    #[test]
    fn skips_nothing_at_token() {
        let (offset, sink) = skip("x + 1");
        assert_eq!(offset, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn skips_whitespace_run() {
        let (offset, sink) = skip("  \t\n x");
        assert_eq!(offset, 5);
        assert_eq!(sink, vec![Trivia::Whitespace("  \t\n ".into())]);
    }

    #[test]
    fn skips_line_comment_to_eol() {
        let (offset, sink) = skip("-- note\nx");
        assert_eq!(offset, 8);
        assert_eq!(
            sink,
            vec![
                Trivia::LineComment("-- note".into()),
                Trivia::Whitespace("\n".into()),
            ]
        );
    }

    #[test]
    fn line_comment_at_eof() {
        let (offset, sink) = skip("-- note");
        assert_eq!(offset, 7);
        assert_eq!(sink, vec![Trivia::LineComment("-- note".into())]);
    }

    #[test]
    fn skips_block_comment() {
        let (offset, sink) = skip("/- a -/x");
        assert_eq!(offset, 7);
        assert_eq!(sink, vec![Trivia::BlockComment("/- a -/".into())]);
    }

    #[test]
    fn block_comments_nest() {
        let (offset, sink) = skip("/- a /- b -/ c -/ d");
        assert_eq!(offset, 18);
        assert_eq!(
            sink,
            vec![
                Trivia::BlockComment("/- a /- b -/ c -/".into()),
                Trivia::Whitespace(" ".into()),
            ]
        );
    }

    #[test]
    fn mixed_trivia_runs_to_fixed_point() {
        let (offset, sink) = skip(" /- a -/ -- b\n\t x");
        assert_eq!(offset, 16);
        assert_eq!(sink.len(), 5);
        assert!(sink[1].is_comment());
        assert!(sink[3].is_comment());
    }

    #[test]
    fn doc_comment_is_not_trivia() {
        let (offset, sink) = skip("/-- doc -/ x");
        assert_eq!(offset, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn doc_comment_after_whitespace_stops_the_skipper() {
        let (offset, sink) = skip("  /-- doc -/");
        assert_eq!(offset, 2);
        assert_eq!(sink, vec![Trivia::Whitespace("  ".into())]);
    }

    #[test]
    fn nested_doc_opener_inside_block_comment_still_nests() {
        // Inside a block comment the doc-comment distinction is gone; any
        // `/-` increments the counter.
        let (offset, _sink) = skip("/- /-- inner -/ -/x");
        assert_eq!(offset, 18);
    }

    #[test]
    fn unterminated_block_comment_fails() {
        let mut sink = Vec::new();
        let err = skip_trivia(Cursor::new("/- a"), &mut sink).unwrap_err();
        assert_eq!(err.kind, TokenErrorKind::UnterminatedComment);
        // anchored at the outermost opener
        assert_eq!(err.span.start(), 0);
        assert_eq!(err.span.end(), 4);
    }

    #[test]
    fn unterminated_nested_comment_reports_outermost_opener() {
        let mut sink = Vec::new();
        let err = skip_trivia(Cursor::new("x /- a /- b -/"), &mut sink);
        assert!(err.is_ok(), "skipper starts at a token, consumes nothing");

        let mut sink = Vec::new();
        let err = skip_trivia(Cursor::new("/- a /- b -/"), &mut sink).unwrap_err();
        assert_eq!(err.span.start(), 0);
    }

    #[test]
    fn dangling_opener_at_eof_fails() {
        let mut sink = Vec::new();
        let err = skip_trivia(Cursor::new("/-"), &mut sink).unwrap_err();
        assert_eq!(err.kind, TokenErrorKind::UnterminatedComment);
    }

    #[test]
    fn double_dash_inside_block_comment_is_plain_text() {
        let (offset, _) = skip("/- -- not a line comment -/x");
        assert_eq!(offset, 27);
    }
}
