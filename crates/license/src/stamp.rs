//! Deciding on and applying SPDX headers.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LicenseError, Result};
use crate::license::{License, spdx_header};
use crate::marker::Marker;

/// Why a file was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
	/// The first line is not an `@tag` block comment.
	NoMarker,
	/// The first line carries a tag other than `@license`.
	OtherTag(String),
	/// `@license: none` or `@license: ignore`.
	OptOut,
}

/// What happened (or would happen) to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// A header for this license was prepended.
	Stamped(License),
	/// The file was not modified.
	Skipped(SkipReason),
}

/// Decides what to do with a file's content without touching disk.
pub fn plan(content: &str) -> Result<Outcome> {
	let first_line = content.lines().next().unwrap_or("");
	let outcome = match Marker::parse(first_line) {
		None => Outcome::Skipped(SkipReason::NoMarker),
		Some(Marker::Other(tag)) => Outcome::Skipped(SkipReason::OtherTag(tag.to_string())),
		Some(marker) if marker.is_opt_out() => Outcome::Skipped(SkipReason::OptOut),
		Some(Marker::License(key)) => Outcome::Stamped(License::from_key(key)?),
	};
	Ok(outcome)
}

/// Stamps a single file in place.
///
/// The file is only written when a header is added, and never when the
/// license key is unknown.
pub fn stamp_file(path: &Path) -> Result<Outcome> {
	let io_error = |error| LicenseError::Io {
		path: path.to_path_buf(),
		error,
	};

	let content = fs::read_to_string(path).map_err(io_error)?;
	let outcome = plan(&content)?;
	match &outcome {
		Outcome::Stamped(license) => {
			let mut stamped = spdx_header(*license);
			stamped.push_str(&content);
			fs::write(path, stamped).map_err(io_error)?;
			info!(path = %path.display(), spdx = license.spdx_id(), "stamped");
		}
		Outcome::Skipped(reason) => {
			debug!(path = %path.display(), ?reason, "skipped");
		}
	}
	Ok(outcome)
}
