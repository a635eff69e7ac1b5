//! `alacritty2fb`: prints the framebuffer console color tables for an
//! Alacritty color scheme.

mod cli;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	kerntools_cli::setup_tracing(cli.verbose);

	let declaration = kerntools_theme::convert(&cli.filename, cli.directory.as_deref())
		.with_context(|| format!("failed to convert {}", cli.filename.display()))?;
	debug!(bytes = declaration.len(), "writing declaration");

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(declaration.as_bytes()).context("failed to write to stdout")?;
	stdout.flush().context("failed to flush stdout")?;
	Ok(())
}
