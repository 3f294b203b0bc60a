//! Defines the command-line arguments and subcommands for the skein CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "skein",
    version,
    about = "Recursive-descent parsing from composable rules."
)]
pub struct SkeinArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a wallet origin string and print the structured value.
    Origin {
        /// The origin string, e.g. wpkh([d34db33f/84'/0'/0']).
        #[arg(required = true)]
        input: String,
        /// Emit the parsed value as JSON instead of the pretty form.
        #[arg(long)]
        json: bool,
    },
    /// Decode a byte-packed text value and parse it as an origin string.
    Unpack {
        /// The packed value, decimal or 0x-prefixed hex.
        #[arg(required = true)]
        atom: String,
        /// Only print the decoded text, without parsing it.
        #[arg(long)]
        raw: bool,
        /// Emit the parsed value as JSON instead of the pretty form.
        #[arg(long)]
        json: bool,
    },
}
