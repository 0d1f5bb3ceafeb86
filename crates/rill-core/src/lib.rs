// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rill language front-end core.
//!
//! This crate contains the tokenizer for the Rill parser. Rill's grammar is
//! combinator-based with an extensible token table: keywords and operators
//! are registered at runtime rather than baked into the lexer, so the
//! tokenizer is driven by a [`tokenize::TokenTable`] supplied by the caller.
//!
//! The tokenizer is designed for parser use, prioritizing transactional
//! backtracking and exact source reconstruction over raw throughput.

#![doc = include_str!("../../../README.md")]

pub mod tokenize;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::tokenize::{
        SourceInfo, Span, Token, TokenEntry, TokenError, TokenKind, TokenTable, Tokenizer, Trivia,
    };
}
