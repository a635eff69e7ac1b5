//! Color scheme model and TOML loading.
//!
//! Reads the Alacritty theme layout:
//!
//! ```toml
//! [colors.primary]
//! background = "#282828"
//! foreground = "#ebdbb2"
//!
//! [colors.normal]
//! black = "#282828"
//! # ... all eight colors
//!
//! [colors.bright]   # optional
//! black = "#928374"
//! ```
//!
//! A document without a `colors` table is read with `primary`, `normal` and
//! `bright` at the top level. Everything else in the file is ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::color::{ColorName, HexColor};
use crate::error::{Result, ThemeError};

/// Subdirectory of a theme repository holding the scheme files.
pub const THEMES_SUBDIR: &str = "themes";

/// Default foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primary {
	pub foreground: HexColor,
	pub background: HexColor,
}

/// The eight ANSI colors of one group, stored in canonical index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiPalette([HexColor; ColorName::COUNT]);

impl AnsiPalette {
	/// Color stored for `name`.
	#[cfg(test)]
	pub(crate) fn get(&self, name: ColorName) -> HexColor {
		self.0[name.index()]
	}

	/// Colors in canonical index order.
	pub fn colors(&self) -> &[HexColor; ColorName::COUNT] {
		&self.0
	}

	fn from_group(group: &'static str, entries: &BTreeMap<String, String>) -> Result<Self> {
		let mut slots = [None; ColorName::COUNT];
		for (name, value) in entries {
			let color = ColorName::from_str(name).map_err(|_| ThemeError::UnknownColor {
				group,
				name: name.clone(),
			})?;
			slots[color.index()] = Some(HexColor::parse(value)?);
		}

		if let Some(name) = ColorName::iter().find(|name| slots[name.index()].is_none()) {
			return Err(ThemeError::MissingColor { group, name });
		}
		Ok(Self(slots.map(Option::unwrap_or_default)))
	}
}

/// A validated terminal color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
	pub primary: Primary,
	pub normal: AnsiPalette,
	/// `None` when the file defines no bright colors.
	pub bright: Option<AnsiPalette>,
}

impl ColorScheme {
	/// Parses a scheme from TOML text.
	pub fn parse(input: &str) -> Result<Self> {
		let doc: ThemeDocument = toml::from_str(input)?;
		let raw = doc.colors.unwrap_or(doc.bare);

		let primary = raw.primary.ok_or(ThemeError::MissingGroup("primary"))?;
		let primary = Primary {
			foreground: primary_field(primary.foreground, "primary.foreground")?,
			background: primary_field(primary.background, "primary.background")?,
		};

		let normal = raw.normal.ok_or(ThemeError::MissingGroup("normal"))?;
		let normal = AnsiPalette::from_group("normal", &normal)?;
		let bright = raw
			.bright
			.map(|bright| AnsiPalette::from_group("bright", &bright))
			.transpose()?;

		Ok(Self {
			primary,
			normal,
			bright,
		})
	}

	/// Loads a scheme from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		debug!(path = %path.display(), "loading color scheme");
		let content = std::fs::read_to_string(path).map_err(|error| ThemeError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}

	/// The bright palette, or a copy of the normal palette when the scheme
	/// has none.
	pub fn bright_or_normal(&self) -> AnsiPalette {
		match self.bright {
			Some(bright) => bright,
			None => {
				debug!("no bright colors defined, reusing normal palette");
				self.normal
			}
		}
	}
}

/// Resolves a scheme file name against an optional theme repository root.
///
/// With a directory the result is `<directory>/themes/<filename>`; without
/// one the file name is returned unchanged.
pub fn resolve_theme_path(filename: &Path, directory: Option<&Path>) -> PathBuf {
	match directory {
		Some(dir) => dir.join(THEMES_SUBDIR).join(filename),
		None => filename.to_path_buf(),
	}
}

fn primary_field(value: Option<String>, field: &'static str) -> Result<HexColor> {
	HexColor::parse(&value.ok_or(ThemeError::MissingField(field))?)
}

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	colors: Option<RawColors>,
	#[serde(flatten)]
	bare: RawColors,
}

#[derive(Debug, Default, Deserialize)]
struct RawColors {
	primary: Option<RawPrimary>,
	normal: Option<BTreeMap<String, String>>,
	bright: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct RawPrimary {
	foreground: Option<String>,
	background: Option<String>,
}
