// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Tokenization for Rill source code.
//!
//! This module turns source text into [`Token`]s, one at a time, driven by a
//! [`TokenTable`] of registered symbols. Unlike a conventional lexer there is
//! no fixed keyword set: the table is populated by the surrounding parser
//! framework (ultimately from user declarations) and may change between
//! tokenization passes.
//!
//! # Recognition
//!
//! At each position the tokenizer runs three independent recognizers
//! (registered symbol, identifier, decimal number) and keeps the one
//! that consumed the most input. On a length tie between the symbol and
//! identifier recognizers the symbol wins, which is what makes `if` a
//! keyword rather than an identifier wherever both readings apply.
//!
//! ```
//! use rill_core::tokenize::{TokenTable, Tokenizer, TokenKind};
//!
//! let mut table = TokenTable::new();
//! table.insert("if", 0);
//!
//! let mut tokenizer = Tokenizer::new("if ifx");
//! let token = tokenizer.next_token(&table).unwrap();
//! assert!(matches!(token.kind(), TokenKind::Atom(s) if s == "if"));
//! let token = tokenizer.next_token(&table).unwrap();
//! assert!(matches!(token.kind(), TokenKind::Identifier(s) if s == "ifx"));
//! ```
//!
//! # Trivia
//!
//! Whitespace, `--` line comments, and nested `/- ... -/` block comments are
//! trivia: skipped during recognition but recorded on the surrounding tokens
//! so that the original input can be reconstructed byte-for-byte. A `/--`
//! documentation comment is *not* trivia: the skipper leaves it in place
//! for the grammar to consume as a real token.
//!
//! # Failure
//!
//! All tokenizer entry points are transactional: on failure the tokenizer's
//! cursor is exactly where it was before the call, so callers can try
//! alternative grammar productions. See [`TokenError`] for the taxonomy.

mod cursor;
mod error;
mod recognize;
mod span;
mod table;
mod token;
mod tokenizer;
mod trivia;


pub use cursor::Cursor;
pub use error::{TokenError, TokenErrorKind};
pub use span::{SourceInfo, Span};
pub use table::{ParserExtension, TokenEntry, TokenTable};
pub use token::{Token, TokenKind, Trivia};
pub use tokenizer::{Tokenizer, tokenize, tokenize_with_eof};
