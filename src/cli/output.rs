//! Handles the CLI's user-facing output.
//!
//! Pretty-printing lives here so the command handlers stay shaped like
//! "parse, then emit"; colors degrade automatically when stdout is not a
//! terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::origin::WalletOrigin;

/// Prints a parsed origin string, one field per line.
pub fn print_origin(parsed: &WalletOrigin) -> std::io::Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);

    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{}", parsed.script)?;
    out.reset()?;
    writeln!(out, " origin")?;

    field(&mut out, "fingerprint")?;
    writeln!(out, "{:08x}", parsed.fingerprint)?;

    field(&mut out, "path")?;
    let rendered: Vec<String> = parsed.path.iter().map(|step| step.to_string()).collect();
    writeln!(out, "{}", rendered.join("/"))?;

    out.flush()
}

fn field(out: &mut StandardStream, name: &str) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "  {name:<12} ")?;
    out.reset()
}
