// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The `rill tokens` command: print a file's token stream.

use camino::Utf8Path;
use miette::{IntoDiagnostic, Result, WrapErr};
use rill_core::tokenize::{Token, tokenize_with_eof};

use crate::table;

/// Tokenizes `path` and prints one line per token.
pub fn run(path: &Utf8Path, extra_symbols: &[String]) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {path}"))?;
    tracing::debug!(%path, bytes = source.len(), "tokenizing");

    let token_table = table::build(extra_symbols)?;

    let tokens = tokenize_with_eof(&source, &token_table)
        .map_err(|error| miette::Report::new(error).with_source_code(source.clone()))?;

    for token in &tokens {
        print_token(token);
    }
    Ok(())
}

/// Prints a token as `START..END  DESCRIPTION`, with trivia counts when
/// present.
fn print_token(token: &Token) {
    let span = token.span();
    let trivia = token.leading_trivia().len() + token.trailing_trivia().len();
    if trivia == 0 {
        println!("{:>5}..{:<5} {}", span.start(), span.end(), token.kind().describe());
    } else {
        println!(
            "{:>5}..{:<5} {}  ({trivia} trivia)",
            span.start(),
            span.end(),
            token.kind().describe()
        );
    }
}
