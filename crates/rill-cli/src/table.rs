// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The default symbol set for command-line tokenization.
//!
//! A real parse session builds its table from the prelude and from user
//! declarations. The CLI has neither, so it starts from this baseline and
//! lets `--symbol` flags extend it.

use miette::{Result, miette};
use rill_core::tokenize::TokenTable;

/// Binding powers follow the expression grammar: comparison below additive
/// below multiplicative; keywords and delimiters carry no binding power.
const DEFAULT_SYMBOLS: &[(&str, u32)] = &[
    // declarations and structure
    ("def", 0),
    ("let", 0),
    ("fun", 0),
    ("in", 0),
    ("if", 0),
    ("then", 0),
    ("else", 0),
    (":=", 0),
    (":", 0),
    (";", 0),
    (",", 0),
    ("(", 0),
    (")", 0),
    ("=>", 0),
    ("->", 25),
    // operators
    ("=", 50),
    ("<", 50),
    (">", 50),
    ("<=", 50),
    (">=", 50),
    ("+", 65),
    ("-", 65),
    ("*", 70),
    ("/", 70),
];

/// Builds the CLI's token table: the defaults plus any `--symbol` flags.
///
/// Each flag is `TEXT` or `TEXT:BP`; the last `:` splits text from binding
/// power so symbols containing a colon (like `:=`) can still be given.
pub fn build(extra_symbols: &[String]) -> Result<TokenTable> {
    let mut table = TokenTable::with_symbols(DEFAULT_SYMBOLS.iter().copied());
    for spec in extra_symbols {
        let (text, binding_power) = parse_symbol_spec(spec)?;
        table.insert(text, binding_power);
        tracing::debug!(text, binding_power, "registered symbol");
    }
    tracing::debug!(symbols = table.len(), "token table ready");
    Ok(table)
}

/// Splits a `--symbol` flag into text and binding power.
fn parse_symbol_spec(spec: &str) -> Result<(&str, u32)> {
    match spec.rsplit_once(':') {
        Some((text, bp)) if !text.is_empty() => {
            let binding_power = bp
                .parse()
                .map_err(|_| miette!("invalid binding power `{bp}` in --symbol `{spec}`"))?;
            Ok((text, binding_power))
        }
        _ if spec.is_empty() => Err(miette!("--symbol requires a non-empty TEXT")),
        _ => Ok((spec, 0)),
    }
}
