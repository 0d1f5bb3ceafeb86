// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tokenizer.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics.
//! They integrate with [`miette`] for beautiful error reporting.
//!
//! Every failure is an ordinary value: the tokenizer never panics on
//! malformed input, and a failed call leaves the tokenizer state untouched
//! so the caller can try an alternative production or report the error.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// An error encountered during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct TokenError {
    /// The kind of error.
    #[source]
    pub kind: TokenErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl TokenError {
    /// Creates a new tokenizer error.
    #[must_use]
    pub fn new(kind: TokenErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unterminated comment block" error.
    ///
    /// `span` starts at the outermost `/-` of the unterminated comment.
    #[must_use]
    pub fn unterminated_comment(span: Span) -> Self {
        Self::new(TokenErrorKind::UnterminatedComment, span)
    }

    /// Creates an "expected token" error: no recognizer matched.
    #[must_use]
    pub fn expected_token(span: Span) -> Self {
        Self::new(TokenErrorKind::ExpectedToken, span)
    }

    /// Creates a kind-mismatch error from an `expect_*` combinator.
    #[must_use]
    pub fn expected(
        expected: impl Into<EcoString>,
        found: impl Into<EcoString>,
        span: Span,
    ) -> Self {
        Self::new(
            TokenErrorKind::Expected {
                expected: expected.into(),
                found: found.into(),
            },
            span,
        )
    }

    /// Creates a "not implemented" error for a variable-length symbol.
    #[must_use]
    pub fn unsupported_extension(symbol: impl Into<EcoString>, span: Span) -> Self {
        Self::new(
            TokenErrorKind::UnsupportedExtension {
                symbol: symbol.into(),
            },
            span,
        )
    }

    /// Returns `true` if this error is an ordinary backtracking failure.
    ///
    /// Recoverable errors let the caller try alternative grammar
    /// productions. [`TokenErrorKind::UnsupportedExtension`] is not
    /// recoverable: it signals a token-table entry this core cannot
    /// service, which retrying other productions will not fix.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self.kind, TokenErrorKind::UnsupportedExtension { .. })
    }
}

/// The kind of tokenizer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenErrorKind {
    /// A block comment's nesting never returned to zero before end of input.
    #[error("unterminated comment block")]
    UnterminatedComment,

    /// No recognizer matched at this position.
    #[error("expected token")]
    ExpectedToken,

    /// An `expect_*` combinator received a token of the wrong kind or text.
    #[error("expected {expected}, found {found}")]
    Expected {
        /// What the combinator was asked to match.
        expected: EcoString,
        /// A description of the token actually found.
        found: EcoString,
    },

    /// A registered symbol carries a variable-length extension rule, which
    /// this core does not implement.
    #[error("variable-length symbol `{symbol}` is not implemented")]
    UnsupportedExtension {
        /// The text of the offending table entry.
        symbol: EcoString,
    },
}
