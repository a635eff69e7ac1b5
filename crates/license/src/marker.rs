//! First-line marker comments.
//!
//! A marker is a single-line block comment whose body is a colon separated
//! tag starting with `@`:
//!
//! ```c
//! /* @license: gpl2 */
//! ```
//!
//! Multi-line comments, line comments and comments without an `@` tag are
//! not markers.

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// Keys that explicitly opt a file out of stamping.
pub const OPT_OUT_KEYS: [&str; 2] = ["none", "ignore"];

/// A recognized `@tag` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
	/// `@license` with its (possibly empty) key.
	License(&'a str),
	/// Any other `@tag`.
	Other(&'a str),
}

impl<'a> Marker<'a> {
	/// Parses the first line of a file. Returns `None` when the line is not a
	/// marker comment.
	pub fn parse(line: &'a str) -> Option<Self> {
		let rest = line.strip_prefix(COMMENT_OPEN)?;
		let close = rest.find(COMMENT_CLOSE)?;

		let mut fields = rest[..close].trim().split(':').map(str::trim);
		let tag = fields.next()?.strip_prefix('@')?;
		if tag != "license" {
			return Some(Self::Other(tag));
		}
		Some(Self::License(fields.next().unwrap_or("")))
	}

	/// True for `@license: none` and `@license: ignore`.
	pub fn is_opt_out(&self) -> bool {
		matches!(self, Self::License(key) if OPT_OUT_KEYS.contains(key))
	}
}

#[cfg(test)]
mod tests;
