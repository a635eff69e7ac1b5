//! Command-line arguments for `alacritty2fb`.

use std::path::PathBuf;

use clap::Parser;
use kerntools_cli::cli_styles;

#[derive(Parser, Debug)]
#[command(name = "alacritty2fb")]
#[command(about = "Converts alacritty TOML colorschemes to C framebuffer values")]
#[command(version)]
#[command(styles = cli_styles())]
/// Command-line arguments.
pub struct Cli {
	/// Color scheme file (a name inside `<DIR>/themes` when --directory is given)
	pub filename: PathBuf,

	/// Directory of an installed https://github.com/alacritty/alacritty-theme checkout
	#[arg(short, long, value_name = "DIR")]
	pub directory: Option<PathBuf>,

	/// Debug logging on stderr
	#[arg(short, long)]
	pub verbose: bool,
}
