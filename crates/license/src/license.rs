//! Known license keys and their SPDX identifiers.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::error::{LicenseError, Result};

/// A license that can be requested by a `@license` marker.
///
/// The marker key is the lowercase variant name (`bsd2`, `mit`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum License {
	Bsd2,
	Mit,
	Gpl2,
	Gpl3,
	Unlicense,
}

impl License {
	/// Looks up a marker key.
	pub fn from_key(key: &str) -> Result<Self> {
		Self::from_str(key).map_err(|_| LicenseError::UnknownLicense(key.to_string()))
	}

	/// SPDX short identifier.
	pub const fn spdx_id(self) -> &'static str {
		match self {
			Self::Bsd2 => "BSD-2-Clause",
			Self::Mit => "MIT",
			Self::Gpl2 => "GPL-2.0",
			Self::Gpl3 => "GPL-3.0",
			Self::Unlicense => "Unlicense",
		}
	}
}

/// The header line inserted above the marker, including its newline.
pub fn spdx_header(license: License) -> String {
	format!("/* SPDX-License-Identifier: {} */\n", license.spdx_id())
}
