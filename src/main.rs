//! `pier` binary: print text in a terminal style.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use pier::{create_style, render_with_output, ColorSpec, OutputMode, Style};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pier", version, about = "Print text in terminal colors")]
struct Cli {
    /// Text to print
    #[arg(default_value = "Hello")]
    text: String,

    /// Foreground color: name, #hex, rgb(r, g, b) or palette index
    #[arg(long, default_value = "#FF0000")]
    fg: String,

    /// Background color, same formats as --fg
    #[arg(long)]
    bg: Option<String>,

    #[arg(long)]
    bold: bool,

    #[arg(long)]
    dim: bool,

    #[arg(long)]
    italic: bool,

    #[arg(long)]
    underline: bool,

    /// Output mode
    #[arg(long, value_enum, default_value_t = OutputMode::Auto)]
    output: OutputMode,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let style = build_style(&cli)?;

    let line = render_with_output(&style, &cli.text, cli.output);
    match write_line(&line) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before output was written");
            Ok(())
        }
        other => other.context("failed writing to stdout"),
    }
}

fn write_line(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()
}

fn build_style(cli: &Cli) -> Result<Style> {
    let fg: ColorSpec = cli.fg.parse().context("invalid --fg color")?;
    let mut style = create_style(fg)?;

    if let Some(bg) = &cli.bg {
        let bg: ColorSpec = bg.parse().context("invalid --bg color")?;
        style = style.background(bg)?;
    }
    if cli.bold {
        style = style.bold();
    }
    if cli.dim {
        style = style.dim();
    }
    if cli.italic {
        style = style.italic();
    }
    if cli.underline {
        style = style.underline();
    }

    tracing::debug!(style = %style, mode = %cli.output, "rendering");
    Ok(style)
}
