//! `license-stamp`: prepends SPDX identifiers to files that ask for one.
//!
//! Files are processed in argument order and the run stops at the first
//! error. Files stamped before the failure stay stamped.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use kerntools_license::{Outcome, stamp_file};
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	kerntools_cli::setup_tracing(false);

	let mut stamped = 0usize;
	for path in &cli.files {
		let outcome =
			stamp_file(path).with_context(|| format!("failed to stamp {}", path.display()))?;
		if matches!(outcome, Outcome::Stamped(_)) {
			stamped += 1;
		}
	}
	debug!(stamped, total = cli.files.len(), "done");
	Ok(())
}
