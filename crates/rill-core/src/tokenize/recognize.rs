// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexeme recognizers and the longest-match dispatcher.
//!
//! Three independent recognizers run against the same trivia-free cursor:
//! registered symbol, identifier, and decimal number. Each either fails
//! without consuming anything or succeeds with a token kind and an advanced
//! cursor; recognizers never partially commit.
//!
//! The dispatcher keeps the candidate that consumed the most input. Ties
//! are broken by an explicit kind priority (symbol over identifier over
//! number) rather than by recognizer ordering, so the disambiguation rule
//! cannot drift if the recognizers are rearranged. This tie-break is what
//! makes a registered `if` lex as a keyword even though it is also a
//! syntactically valid identifier.

use ecow::EcoString;

use super::cursor::Cursor;
use super::error::TokenError;
use super::table::TokenTable;
use super::token::TokenKind;

/// A successful recognition: the token kind plus the cursor past it.
#[derive(Debug, Clone)]
pub(crate) struct Recognized<'src> {
    pub(crate) kind: TokenKind,
    pub(crate) end: Cursor<'src>,
}

impl<'src> Recognized<'src> {
    fn new(kind: TokenKind, end: Cursor<'src>) -> Self {
        Self { kind, end }
    }

    /// Bytes consumed from the starting cursor.
    fn consumed(&self, start: Cursor<'src>) -> usize {
        self.end.offset() - start.offset()
    }

    /// Tie-break priority: higher wins at equal consumed length.
    const fn priority(&self) -> u8 {
        match &self.kind {
            TokenKind::Atom(_) => 2,
            TokenKind::Identifier(_) => 1,
            TokenKind::Number(_) | TokenKind::Eof => 0,
        }
    }
}

/// Recognizes a registered symbol via longest-prefix table lookup.
///
/// # Errors
///
/// Fails with `UnsupportedExtension` if the matched entry carries a
/// variable-length extension rule.
fn recognize_symbol<'src>(
    cursor: Cursor<'src>,
    table: &TokenTable,
) -> Result<Option<Recognized<'src>>, TokenError> {
    let Some(entry) = table.lookup_longest_prefix(cursor.rest()) else {
        return Ok(None);
    };
    if entry.extension().is_some() {
        let end = cursor.advance_bytes(entry.text().len());
        return Err(TokenError::unsupported_extension(
            entry.text(),
            end.span_from(cursor),
        ));
    }
    let end = cursor.advance_bytes(entry.text().len());
    Ok(Some(Recognized::new(
        TokenKind::Atom(EcoString::from(entry.text())),
        end,
    )))
}

/// Returns `true` if `c` can start an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns `true` if `c` can continue an identifier.
///
/// Primes allow the `x'` naming convention; dotted namespace paths are
/// assembled by the grammar, not the tokenizer.
fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Recognizes a maximal identifier run.
fn recognize_identifier(cursor: Cursor<'_>) -> Option<Recognized<'_>> {
    if !cursor.peek().is_some_and(is_identifier_start) {
        return None;
    }
    let end = cursor.bump().advance_while(is_identifier_continue);
    Some(Recognized::new(
        TokenKind::Identifier(EcoString::from(end.text_from(cursor))),
        end,
    ))
}

/// Recognizes a maximal run of decimal digits (at least one).
fn recognize_number(cursor: Cursor<'_>) -> Option<Recognized<'_>> {
    if !cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    let end = cursor.advance_while(|c| c.is_ascii_digit());
    Some(Recognized::new(
        TokenKind::Number(EcoString::from(end.text_from(cursor))),
        end,
    ))
}

/// Runs all recognizers at `cursor` and returns the longest match, with
/// ties broken by kind priority.
///
/// # Errors
///
/// `ExpectedToken` if no recognizer succeeds; `UnsupportedExtension` if the
/// symbol table matched an extension entry.
pub(crate) fn next_lexeme<'src>(
    cursor: Cursor<'src>,
    table: &TokenTable,
) -> Result<Recognized<'src>, TokenError> {
    let candidates = [
        recognize_symbol(cursor, table)?,
        recognize_identifier(cursor),
        recognize_number(cursor),
    ];
    candidates
        .into_iter()
        .flatten()
        .max_by_key(|candidate| (candidate.consumed(cursor), candidate.priority()))
        .ok_or_else(|| TokenError::expected_token(cursor.span_from(cursor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::TokenErrorKind;
    use crate::tokenize::table::{ParserExtension, TokenEntry};

    fn lexeme(input: &str, table: &TokenTable) -> (TokenKind, usize) {
        let recognized = next_lexeme(Cursor::new(input), table).unwrap();
        (recognized.kind, recognized.end.offset())
    }

    #[test]
    fn symbol_match_consumes_exact_text() {
        let table = TokenTable::with_symbols([(":=", 0)]);
        let (kind, end) = lexeme(":= x", &table);
        assert_eq!(kind, TokenKind::Atom(":=".into()));
        assert_eq!(end, 2);
    }

    #[test]
    fn identifier_is_maximal() {
        let table = TokenTable::new();
        let (kind, end) = lexeme("foo_bar' + 1", &table);
        assert_eq!(kind, TokenKind::Identifier("foo_bar'".into()));
        assert_eq!(end, 8);
    }

    #[test]
    fn number_is_maximal_digit_run() {
        let table = TokenTable::new();
        let (kind, end) = lexeme("00729", &table);
        assert_eq!(kind, TokenKind::Number("00729".into()));
        assert_eq!(end, 5);
    }

    #[test]
    fn number_stops_at_identifier_boundary() {
        let table = TokenTable::new();
        let (kind, end) = lexeme("123abc", &table);
        assert_eq!(kind, TokenKind::Number("123".into()));
        assert_eq!(end, 3);
    }

    #[test]
    fn keyword_shadows_equal_length_identifier() {
        let table = TokenTable::with_symbols([("if", 0)]);
        let (kind, _) = lexeme("if", &table);
        assert_eq!(kind, TokenKind::Atom("if".into()));
    }

    #[test]
    fn longer_identifier_beats_keyword_prefix() {
        let table = TokenTable::with_symbols([("if", 0)]);
        let (kind, end) = lexeme("ifx", &table);
        assert_eq!(kind, TokenKind::Identifier("ifx".into()));
        assert_eq!(end, 3);
    }

    #[test]
    fn longer_symbol_beats_identifier() {
        // a registered symbol can reach past an identifier boundary
        let table = TokenTable::with_symbols([("max!", 0)]);
        let (kind, end) = lexeme("max!", &table);
        assert_eq!(kind, TokenKind::Atom("max!".into()));
        assert_eq!(end, 4);
    }

    #[test]
    fn nothing_matches() {
        let table = TokenTable::new();
        let err = next_lexeme(Cursor::new("§"), &table).unwrap_err();
        assert_eq!(err.kind, TokenErrorKind::ExpectedToken);
        assert!(err.span.is_empty());
    }

    #[test]
    fn extension_symbol_is_not_implemented() {
        let mut table = TokenTable::new();
        table.insert_entry(TokenEntry::with_extension(
            "str!",
            0,
            ParserExtension::new("interpolation"),
        ));
        let err = next_lexeme(Cursor::new("str! abc"), &table).unwrap_err();
        assert!(matches!(
            err.kind,
            TokenErrorKind::UnsupportedExtension { .. }
        ));
    }

    #[test]
    fn unicode_identifier() {
        let table = TokenTable::new();
        let (kind, _) = lexeme("αβγ", &table);
        assert_eq!(kind, TokenKind::Identifier("αβγ".into()));
    }
}
