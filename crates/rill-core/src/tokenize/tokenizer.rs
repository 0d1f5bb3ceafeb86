// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The tokenizer state and its combinator surface.
//!
//! [`Tokenizer`] owns the single piece of mutable state in this module: the
//! cursor where the last call stopped, just past the previous token's
//! trailing trivia. [`Tokenizer::next_token`] is the position/trivia
//! wrapper: it skips leading trivia, dispatches the recognizers, skips
//! trailing trivia, and only then commits the cursor. The `expect_*`
//! combinators narrow the result to an expected kind.
//!
//! Every entry point is transactional. On any failure (unterminated
//! comment, no matching lexeme, kind mismatch) the tokenizer's cursor is
//! exactly where it was before the call, so a backtracking caller can try
//! another production without re-scanning or duplicating trivia.

use super::cursor::Cursor;
use super::error::TokenError;
use super::recognize::next_lexeme;
use super::span::SourceInfo;
use super::table::TokenTable;
use super::token::{Token, TokenKind};
use super::trivia::skip_trivia;

/// A stateful reader of tokens from one unit of input.
///
/// One `Tokenizer` serves one tokenization pass over one source string;
/// tokenizing several inputs concurrently means one `Tokenizer` each. The
/// token table is borrowed per call and never mutated by this type.
///
/// # Examples
///
/// ```
/// use rill_core::tokenize::{TokenTable, Tokenizer, TokenKind};
///
/// let table = TokenTable::with_symbols([(":=", 0)]);
/// let mut tokenizer = Tokenizer::new("answer := 42");
///
/// let token = tokenizer.expect_identifier(&table).unwrap();
/// assert_eq!(token.text(), Some("answer"));
/// tokenizer.expect_symbol(&table, ":=").unwrap();
/// let token = tokenizer.expect_number(&table).unwrap();
/// assert_eq!(token.text(), Some("42"));
///
/// assert!(tokenizer.next_token(&table).unwrap().kind().is_eof());
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    /// Where the previous call stopped: the end of its trailing trivia.
    cursor: Cursor<'src>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the byte offset where the next call will start scanning.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Returns the source text being tokenized.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.cursor.source()
    }

    /// Reads the next token: leading trivia, lexeme, trailing trivia.
    ///
    /// At end of input (or when only trivia remains) this returns an
    /// [`TokenKind::Eof`] token whose leading trivia covers whatever was
    /// left; repeated calls keep returning `Eof`. The cursor is committed
    /// only on success, so a failed call leaves this tokenizer unchanged.
    ///
    /// # Errors
    ///
    /// - [`UnterminatedComment`] if input ends inside a block comment
    /// - [`ExpectedToken`] if no recognizer matches at the position
    /// - [`UnsupportedExtension`] if the table matched an extension entry
    ///
    /// [`UnterminatedComment`]: super::TokenErrorKind::UnterminatedComment
    /// [`ExpectedToken`]: super::TokenErrorKind::ExpectedToken
    /// [`UnsupportedExtension`]: super::TokenErrorKind::UnsupportedExtension
    pub fn next_token(&mut self, table: &TokenTable) -> Result<Token, TokenError> {
        let start = self.cursor;

        let mut leading = Vec::new();
        let token_start = skip_trivia(start, &mut leading)?;

        if token_start.at_end() {
            let info = SourceInfo::new(
                token_start.span_from(start),
                token_start.span_from(token_start),
                token_start.span_from(token_start),
            );
            self.cursor = token_start;
            return Ok(Token::with_trivia(TokenKind::Eof, info, leading, Vec::new()));
        }

        let recognized = next_lexeme(token_start, table)?;

        let mut trailing = Vec::new();
        let end = skip_trivia(recognized.end, &mut trailing)?;

        let info = SourceInfo::new(
            token_start.span_from(start),
            recognized.end.span_from(token_start),
            end.span_from(recognized.end),
        );
        self.cursor = end;
        Ok(Token::with_trivia(recognized.kind, info, leading, trailing))
    }

    /// Reads the next token and requires it to be the registered symbol
    /// `text`.
    ///
    /// # Errors
    ///
    /// Everything [`Self::next_token`] reports, plus a kind mismatch if the
    /// token is not `Atom(text)`. On failure the cursor is unchanged.
    pub fn expect_symbol(&mut self, table: &TokenTable, text: &str) -> Result<Token, TokenError> {
        self.expect(table, |kind| matches!(kind, TokenKind::Atom(s) if s == text), || {
            ecow::eco_format!("symbol `{text}`")
        })
    }

    /// Reads the next token and requires it to be an identifier.
    ///
    /// # Errors
    ///
    /// As [`Self::expect_symbol`], for the identifier kind.
    pub fn expect_identifier(&mut self, table: &TokenTable) -> Result<Token, TokenError> {
        self.expect(table, TokenKind::is_identifier, || "identifier".into())
    }

    /// Reads the next token and requires it to be a number literal.
    ///
    /// # Errors
    ///
    /// As [`Self::expect_symbol`], for the number kind.
    pub fn expect_number(&mut self, table: &TokenTable) -> Result<Token, TokenError> {
        self.expect(table, TokenKind::is_number, || "number".into())
    }

    /// Reads the next token and requires its text to be `text`, whether it
    /// lexed as a registered symbol or as an identifier.
    ///
    /// This is the escape hatch for contextual keywords: a spelling like
    /// `max` can serve as a keyword in one grammar position without being
    /// registered globally, and remain an ordinary identifier elsewhere.
    ///
    /// # Errors
    ///
    /// As [`Self::expect_symbol`], accepting either kind with matching
    /// text.
    pub fn expect_symbol_or_identifier(
        &mut self,
        table: &TokenTable,
        text: &str,
    ) -> Result<Token, TokenError> {
        self.expect(
            table,
            |kind| {
                matches!(kind, TokenKind::Atom(s) | TokenKind::Identifier(s) if s == text)
            },
            || ecow::eco_format!("`{text}`"),
        )
    }

    /// Shared body of the `expect_*` combinators: read a token, test it,
    /// and roll the cursor back if the test fails.
    fn expect(
        &mut self,
        table: &TokenTable,
        accept: impl Fn(&TokenKind) -> bool,
        describe_expected: impl FnOnce() -> ecow::EcoString,
    ) -> Result<Token, TokenError> {
        let saved = self.cursor;
        let token = self.next_token(table)?;
        if accept(token.kind()) {
            Ok(token)
        } else {
            self.cursor = saved;
            Err(TokenError::expected(
                describe_expected(),
                token.kind().describe(),
                token.span(),
            ))
        }
    }
}

/// Tokenizes all of `source`, excluding the final `Eof` token.
///
/// # Errors
///
/// The first error [`Tokenizer::next_token`] reports, if any.
pub fn tokenize(source: &str, table: &TokenTable) -> Result<Vec<Token>, TokenError> {
    let mut tokens = tokenize_with_eof(source, table)?;
    tokens.pop();
    Ok(tokens)
}

/// Tokenizes all of `source`, including the final `Eof` token.
///
/// # Errors
///
/// The first error [`Tokenizer::next_token`] reports, if any.
pub fn tokenize_with_eof(source: &str, table: &TokenTable) -> Result<Vec<Token>, TokenError> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token(table)?;
        let done = token.kind().is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
