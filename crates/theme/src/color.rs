//! ANSI color names and hex color values.

use std::fmt;

use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, ThemeError};

/// One of the eight standard terminal colors.
///
/// The discriminant is the color's position in the console color table, so
/// `ColorName::Blue.index() == 4` no matter where `blue` appears in a theme
/// file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum ColorName {
	/// ANSI 0
	Black = 0,
	/// ANSI 1
	Red = 1,
	/// ANSI 2
	Green = 2,
	/// ANSI 3
	Yellow = 3,
	/// ANSI 4
	Blue = 4,
	/// ANSI 5
	Magenta = 5,
	/// ANSI 6
	Cyan = 6,
	/// ANSI 7
	White = 7,
}

impl ColorName {
	/// Number of colors in a palette group.
	pub const COUNT: usize = 8;

	/// Position of this color in the emitted table.
	#[inline]
	pub const fn index(self) -> usize {
		self as usize
	}
}

/// A validated 24-bit color.
///
/// The six hex digits are kept exactly as written, so `#FFaa00` renders as
/// `0xFFaa00`. [`fmt::Display`] produces the C literal form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor([u8; 6]);

impl HexColor {
	/// Parses `#RRGGBB` or `0xRRGGBB`.
	pub fn parse(s: &str) -> Result<Self> {
		let invalid = || ThemeError::InvalidColor(s.to_string());
		let digits = s
			.strip_prefix('#')
			.or_else(|| s.strip_prefix("0x"))
			.or_else(|| s.strip_prefix("0X"))
			.ok_or_else(invalid)?;

		let bytes: [u8; 6] = digits.as_bytes().try_into().map_err(|_| invalid())?;
		if !bytes.iter().all(u8::is_ascii_hexdigit) {
			return Err(invalid());
		}
		Ok(Self(bytes))
	}

	/// Numeric value of the color, `0xRRGGBB`.
	#[cfg(test)]
	pub(crate) fn value(self) -> u32 {
		self.0.iter().fold(0, |acc, &digit| {
			let nibble = (digit as char).to_digit(16).unwrap_or(0);
			(acc << 4) | nibble
		})
	}

	/// The color as a C hex literal.
	pub fn to_c_literal(self) -> String {
		self.to_string()
	}
}

impl HexColor {
	fn write_digits(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for &digit in &self.0 {
			fmt::Write::write_char(f, digit as char)?;
		}
		Ok(())
	}
}

impl fmt::Display for HexColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("0x")?;
		self.write_digits(f)
	}
}

impl fmt::Debug for HexColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("#")?;
		self.write_digits(f)
	}
}
