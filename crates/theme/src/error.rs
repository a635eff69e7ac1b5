//! Error types for color scheme loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::color::ColorName;

/// Errors that can occur while reading or validating a color scheme.
#[derive(Debug, Error)]
pub enum ThemeError {
	/// Error reading the scheme file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A required color group (`primary`, `normal`) is absent.
	#[error("missing color group: {0}")]
	MissingGroup(&'static str),

	/// A required field inside a group is absent.
	#[error("missing required field: {0}")]
	MissingField(&'static str),

	/// A palette group names a color outside the eight ANSI colors.
	#[error("unknown color name '{name}' in {group} colors")]
	UnknownColor {
		/// Group the name appeared in.
		group: &'static str,
		/// The offending key.
		name: String,
	},

	/// A palette group does not define one of the eight ANSI colors.
	#[error("{group} colors do not define '{name}'")]
	MissingColor {
		/// Group that is incomplete.
		group: &'static str,
		/// First color found missing, in index order.
		name: ColorName,
	},

	/// A color value is not `#RRGGBB` or `0xRRGGBB`.
	#[error("invalid color format: {0}")]
	InvalidColor(String),
}

/// Result type for color scheme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
