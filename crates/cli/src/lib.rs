//! Command-line plumbing shared by the kerntools binaries.
//!
//! Both tools write their real output to stdout (or nowhere), so all
//! diagnostics go to stderr through a `tracing` subscriber.

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use tracing_subscriber::EnvFilter;

/// Help and error styles used by every `#[derive(Parser)]` in the workspace.
pub fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default().bold())
		.placeholder(AnsiColor::Cyan.on_default())
		.error(AnsiColor::Red.on_default().bold())
		.valid(AnsiColor::Cyan.on_default().bold())
		.invalid(AnsiColor::Yellow.on_default().bold())
}

/// Filter directive applied when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "debug" } else { "warn" }
}

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Must be called at most once
/// per process.
pub fn setup_tracing(verbose: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
