// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tokenizer crash safety testing.
//!
//! This target feeds arbitrary byte sequences to the tokenizer and asserts
//! that it never panics and never loops. The tokenizer must handle all
//! input gracefully, producing either a token stream or a structured error.
//!
//! # Success Criteria
//!
//! The tokenizer passes fuzzing if:
//! - It never panics on any input (including invalid UTF-8)
//! - It always terminates (every trivia/recognizer step consumes input)
//! - No assertions fail during tokenization

#![no_main]

use libfuzzer_sys::fuzz_target;
use rill_core::tokenize::{TokenTable, tokenize};

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 (the tokenizer takes &str).
    // Invalid UTF-8 is not a tokenizer concern - it's filtered earlier.
    if let Ok(source) = std::str::from_utf8(data) {
        let table = TokenTable::with_symbols([
            (":=", 0),
            ("(", 0),
            (")", 0),
            ("->", 25),
            ("+", 65),
            ("if", 0),
            ("then", 0),
            ("else", 0),
        ]);

        // Success = no panic, no hang. Errors are fine.
        let _result = tokenize(source, &table);
    }
});
