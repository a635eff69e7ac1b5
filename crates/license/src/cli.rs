//! Command-line arguments for `license-stamp`.

use std::path::PathBuf;

use clap::Parser;
use kerntools_cli::cli_styles;

#[derive(Parser, Debug)]
#[command(name = "license-stamp")]
#[command(about = "Prepends SPDX license identifiers to files with a @license marker")]
#[command(version)]
#[command(styles = cli_styles())]
/// Command-line arguments.
pub struct Cli {
	/// Source files to stamp, processed in order
	pub files: Vec<PathBuf>,
}
