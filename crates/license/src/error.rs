//! Error types for license stamping.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a stamping run.
#[derive(Debug, Error)]
pub enum LicenseError {
	/// Error reading or rewriting a source file.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path to the file that failed.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		error: std::io::Error,
	},

	/// The marker names a license key outside the known table.
	#[error("unknown license key '{0}'")]
	UnknownLicense(String),
}

/// Result type for license stamping.
pub type Result<T> = std::result::Result<T, LicenseError>;
