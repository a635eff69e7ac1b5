//! Alacritty color scheme to framebuffer console color table conversion.
//!
//! The kernel's framebuffer console keeps its default colors in three static
//! C tables. This crate reads an [Alacritty theme] and emits those tables:
//!
//! ```text
//! static struct { uint32_t default_fg; uint32_t default_bg; } colorscheme = {0xebdbb2, 0x282828};
//! static uint32_t ansi_colors[] = {...};
//! static uint32_t ansi_bright_colors[] = {...};
//! ```
//!
//! Array slot `i` always holds the color whose [`ColorName::index`] is `i`.
//! When the theme defines no bright colors the bright table repeats the
//! normal one.
//!
//! [Alacritty theme]: https://github.com/alacritty/alacritty-theme

pub mod color;
pub mod error;
pub mod render;
pub mod scheme;

use std::path::Path;

pub use color::{ColorName, HexColor};
pub use error::{Result, ThemeError};
pub use render::{Declaration, render_declaration};
pub use scheme::{AnsiPalette, ColorScheme, Primary, THEMES_SUBDIR, resolve_theme_path};

/// Resolves, loads and renders a scheme in one step.
///
/// Nothing is returned unless the whole scheme validated.
pub fn convert(filename: &Path, directory: Option<&Path>) -> Result<String> {
	let path = resolve_theme_path(filename, directory);
	let scheme = ColorScheme::load(&path)?;
	Ok(render_declaration(&scheme))
}
