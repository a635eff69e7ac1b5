//! C declaration output.

use std::fmt;

use crate::scheme::{AnsiPalette, ColorScheme};

/// Renders the three-line C declaration for `scheme`.
///
/// ```text
/// static struct { uint32_t default_fg; uint32_t default_bg; } colorscheme = {0xffffff, 0x000000};
/// static uint32_t ansi_colors[] = {0x000000, ...};
/// static uint32_t ansi_bright_colors[] = {0x808080, ...};
/// ```
pub fn render_declaration(scheme: &ColorScheme) -> String {
	Declaration(scheme).to_string()
}

/// [`fmt::Display`] adapter for a scheme's C declaration.
pub struct Declaration<'a>(pub &'a ColorScheme);

impl fmt::Display for Declaration<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let scheme = self.0;
		writeln!(
			f,
			"static struct {{ uint32_t default_fg; uint32_t default_bg; }} colorscheme = {{{}, {}}};",
			scheme.primary.foreground, scheme.primary.background
		)?;
		writeln!(f, "static uint32_t ansi_colors[] = {{{}}};", ArrayBody(&scheme.normal))?;
		writeln!(
			f,
			"static uint32_t ansi_bright_colors[] = {{{}}};",
			ArrayBody(&scheme.bright_or_normal())
		)
	}
}

struct ArrayBody<'a>(&'a AnsiPalette);

impl fmt::Display for ArrayBody<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, color) in self.0.colors().iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{color}")?;
		}
		Ok(())
	}
}
