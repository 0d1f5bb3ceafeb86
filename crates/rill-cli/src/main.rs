// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rill command-line interface.
//!
//! This is the main entry point for the `rill` command.

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod table;

/// Rill: a small language with extensible syntax
#[derive(Debug, Parser)]
#[command(name = "rill")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (or set `RILL_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Tokens {
        /// Source file to tokenize
        path: camino::Utf8PathBuf,

        /// Register an extra symbol, as `TEXT` or `TEXT:BINDING_POWER`
        /// (may be repeated)
        #[arg(long = "symbol", value_name = "TEXT[:BP]")]
        symbols: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Tokens { path, symbols } => commands::tokens::run(&path, &symbols),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

/// Initializes logging to stderr, honouring `RILL_LOG` over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "rill=debug" } else { "rill=warn" };
    let filter = EnvFilter::try_from_env("RILL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
