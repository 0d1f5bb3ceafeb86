// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types produced by the tokenizer.
//!
//! Each token consists of:
//! - A [`TokenKind`] indicating the recognized lexeme
//! - A [`SourceInfo`] with the spans of the token and its surrounding trivia
//! - Leading and trailing [`Trivia`] pieces for exact source reconstruction
//!
//! Tokens are value objects: they have no identity beyond structural
//! equality and are produced fresh on each successful recognition.

use ecow::EcoString;

use super::{SourceInfo, Span};

/// The kind of token, not including source location or trivia.
///
/// Tokens are designed to be cheap to clone (using [`EcoString`] for
/// string data).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A matched registered symbol: `:=`, `if`, `->`
    Atom(EcoString),

    /// An identifier: `foo`, `collatz'`, `_tmp`
    Identifier(EcoString),

    /// A decimal number literal: `42`, `007`
    Number(EcoString),

    /// End of input. Produced once the remaining input is all trivia.
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is a registered symbol.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// Returns `true` if this token is an identifier.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }

    /// Returns `true` if this token is a number literal.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns the string content if this token carries one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Atom(s) | Self::Identifier(s) | Self::Number(s) => Some(s),
            Self::Eof => None,
        }
    }

    /// Describes this token for diagnostics: ``identifier `foo` ``,
    /// ``symbol `:=` ``, ``number `42` ``, or `end of input`.
    #[must_use]
    pub fn describe(&self) -> EcoString {
        match self {
            Self::Atom(s) => ecow::eco_format!("symbol `{s}`"),
            Self::Identifier(s) => ecow::eco_format!("identifier `{s}`"),
            Self::Number(s) => ecow::eco_format!("number `{s}`"),
            Self::Eof => EcoString::from("end of input"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(s) | Self::Identifier(s) | Self::Number(s) => write!(f, "{s}"),
            Self::Eof => write!(f, "<eof>"),
        }
    }
}

/// Trivia represents non-semantic content like whitespace and comments.
///
/// Preserving trivia lets tooling reconstruct source code exactly and
/// associate comments with adjacent tokens. Documentation comments
/// (`/-- ... -/`) are deliberately absent here: they are real tokens, not
/// trivia, and the skipper never consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trivia {
    /// Whitespace (spaces, tabs, newlines)
    Whitespace(EcoString),

    /// A line comment: `-- comment text`
    LineComment(EcoString),

    /// A block comment, including any nested comments: `/- a /- b -/ c -/`
    BlockComment(EcoString),
}

impl Trivia {
    /// Returns the text content of this trivia.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Whitespace(s) | Self::LineComment(s) | Self::BlockComment(s) => s,
        }
    }

    /// Returns `true` if this trivia contains a newline.
    #[must_use]
    pub fn contains_newline(&self) -> bool {
        self.as_str().contains('\n')
    }

    /// Returns `true` if this is whitespace.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace(_))
    }

    /// Returns `true` if this is a comment.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::LineComment(_) | Self::BlockComment(_))
    }
}

/// A token with its source location and surrounding trivia.
///
/// # Examples
///
/// ```
/// use rill_core::tokenize::{TokenTable, Tokenizer, TokenKind};
///
/// let mut tokenizer = Tokenizer::new("  x  ");
/// let token = tokenizer.next_token(&TokenTable::new()).unwrap();
/// assert!(matches!(token.kind(), TokenKind::Identifier(_)));
/// assert_eq!(token.span().as_range(), 2..3);
/// assert_eq!(token.leading_trivia().len(), 1);
/// assert_eq!(token.trailing_trivia().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    info: SourceInfo,
    leading_trivia: Vec<Trivia>,
    trailing_trivia: Vec<Trivia>,
}

impl Token {
    /// Creates a new token with no trivia pieces.
    #[must_use]
    pub fn new(kind: TokenKind, info: SourceInfo) -> Self {
        Self {
            kind,
            info,
            leading_trivia: Vec::new(),
            trailing_trivia: Vec::new(),
        }
    }

    /// Creates a new token with trivia.
    #[must_use]
    pub fn with_trivia(
        kind: TokenKind,
        info: SourceInfo,
        leading_trivia: Vec<Trivia>,
        trailing_trivia: Vec<Trivia>,
    ) -> Self {
        Self {
            kind,
            info,
            leading_trivia,
            trailing_trivia,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source info for this token.
    #[must_use]
    pub fn info(&self) -> SourceInfo {
        self.info
    }

    /// Returns the source span of the token text (excluding trivia).
    #[must_use]
    pub fn span(&self) -> Span {
        self.info.token()
    }

    /// Returns the text content of this token, if it carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.kind.as_str()
    }

    /// Returns the leading trivia pieces.
    #[must_use]
    pub fn leading_trivia(&self) -> &[Trivia] {
        &self.leading_trivia
    }

    /// Returns the trailing trivia pieces.
    #[must_use]
    pub fn trailing_trivia(&self) -> &[Trivia] {
        &self.trailing_trivia
    }

    /// Returns `true` if any leading trivia is a comment.
    #[must_use]
    pub fn has_leading_comment(&self) -> bool {
        self.leading_trivia.iter().any(Trivia::is_comment)
    }

    /// Returns `true` if any trailing trivia is a comment.
    #[must_use]
    pub fn has_trailing_comment(&self) -> bool {
        self.trailing_trivia.iter().any(Trivia::is_comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(leading: (u32, u32), token: (u32, u32), trailing: (u32, u32)) -> SourceInfo {
        SourceInfo::new(
            Span::new(leading.0, leading.1),
            Span::new(token.0, token.1),
            Span::new(trailing.0, trailing.1),
        )
    }

    #[test]
    fn token_kind_predicates() {
        assert!(TokenKind::Atom("if".into()).is_atom());
        assert!(TokenKind::Identifier("x".into()).is_identifier());
        assert!(TokenKind::Number("42".into()).is_number());
        assert!(TokenKind::Eof.is_eof());
        assert!(!TokenKind::Eof.is_atom());
    }

    #[test]
    fn token_kind_as_str() {
        assert_eq!(TokenKind::Atom(":=".into()).as_str(), Some(":="));
        assert_eq!(TokenKind::Identifier("x".into()).as_str(), Some("x"));
        assert_eq!(TokenKind::Number("7".into()).as_str(), Some("7"));
        assert_eq!(TokenKind::Eof.as_str(), None);
    }

    #[test]
    fn token_kind_display() {
        assert_eq!(TokenKind::Atom(":=".into()).to_string(), ":=");
        assert_eq!(TokenKind::Eof.to_string(), "<eof>");
    }

    #[test]
    fn token_kind_describe() {
        assert_eq!(TokenKind::Atom(":=".into()).describe(), "symbol `:=`");
        assert_eq!(
            TokenKind::Identifier("x".into()).describe(),
            "identifier `x`"
        );
        assert_eq!(TokenKind::Number("7".into()).describe(), "number `7`");
        assert_eq!(TokenKind::Eof.describe(), "end of input");
    }

    #[test]
    fn trivia_predicates() {
        let ws = Trivia::Whitespace("  \n".into());
        assert!(ws.is_whitespace());
        assert!(!ws.is_comment());
        assert!(ws.contains_newline());

        let line = Trivia::LineComment("-- note".into());
        assert!(line.is_comment());
        assert!(!line.contains_newline());

        let block = Trivia::BlockComment("/- a -/".into());
        assert!(block.is_comment());
    }

    #[test]
    fn token_accessors() {
        let token = Token::with_trivia(
            TokenKind::Identifier("x".into()),
            info((0, 2), (2, 3), (3, 4)),
            vec![Trivia::Whitespace("  ".into())],
            vec![Trivia::LineComment("-- x".into())],
        );
        assert_eq!(token.span(), Span::new(2, 3));
        assert_eq!(token.text(), Some("x"));
        assert!(!token.has_leading_comment());
        assert!(token.has_trailing_comment());
        assert_eq!(token.info().full(), Span::new(0, 4));
    }
}
