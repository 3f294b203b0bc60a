//! The skein command-line interface.
//!
//! A thin front over the library: each subcommand builds a grammar, drives
//! it with an entry point, and renders the value or the diagnostic.

use clap::Parser;
use miette::IntoDiagnostic;
use std::process;

use crate::cli::args::{Command, SkeinArgs};
use crate::entry::{parse_all, unpack_text};
use crate::origin::{self, WalletOrigin};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = SkeinArgs::parse();

    let result = match args.command {
        Command::Origin { input, json } => handle_origin(&input, json),
        Command::Unpack { atom, raw, json } => handle_unpack(&atom, raw, json),
    };

    if let Err(report) = result {
        eprintln!("{report:?}");
        process::exit(1);
    }
}

/// Handles the `origin` subcommand.
fn handle_origin(input: &str, json: bool) -> miette::Result<()> {
    let parsed = parse_all(origin::origin(), input)?;
    emit_origin(&parsed, json)
}

/// Handles the `unpack` subcommand.
fn handle_unpack(atom: &str, raw: bool, json: bool) -> miette::Result<()> {
    let value = parse_atom_arg(atom)?;
    let text = unpack_text(value)?;
    if raw {
        println!("{text}");
        return Ok(());
    }
    let parsed = parse_all(origin::origin(), &text)?;
    emit_origin(&parsed, json)
}

fn emit_origin(parsed: &WalletOrigin, json: bool) -> miette::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(parsed).into_diagnostic()?;
        println!("{rendered}");
    } else {
        output::print_origin(parsed).into_diagnostic()?;
    }
    Ok(())
}

fn parse_atom_arg(text: &str) -> miette::Result<u128> {
    let parsed = match text.strip_prefix("0x") {
        Some(hex) => u128::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| miette::miette!("`{text}` is not a decimal or 0x-prefixed number"))
}
