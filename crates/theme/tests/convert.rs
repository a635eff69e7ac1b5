use std::path::{Path, PathBuf};
use std::process::Command;

use kerntools_theme::{ThemeError, convert};
use pretty_assertions::assert_eq;

fn fixtures() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn alacritty2fb() -> Command {
	Command::new(env!("CARGO_BIN_EXE_alacritty2fb"))
}

const GRUVBOX: &str = "\
static struct { uint32_t default_fg; uint32_t default_bg; } colorscheme = {0xebdbb2, 0x282828};
static uint32_t ansi_colors[] = {0x282828, 0xcc241d, 0x98971a, 0xd79921, 0x458588, 0xb16286, 0x689d6a, 0xa89984};
static uint32_t ansi_bright_colors[] = {0x928374, 0xfb4934, 0xb8bb26, 0xfabd2f, 0x83a598, 0xd3869b, 0x8ec07c, 0xebdbb2};
";

#[test]
fn converts_from_theme_repository() {
	let out = convert(Path::new("gruvbox_dark.toml"), Some(fixtures().as_path())).unwrap();
	assert_eq!(out, GRUVBOX);
}

#[test]
fn converts_verbatim_path() {
	let path = fixtures().join("themes/gruvbox_dark.toml");
	assert_eq!(convert(&path, None).unwrap(), GRUVBOX);
}

#[test]
fn legacy_hex_without_bright_duplicates_normal() {
	let out = convert(Path::new("legacy_hex.toml"), Some(fixtures().as_path())).unwrap();
	assert_eq!(
		out,
		"\
static struct { uint32_t default_fg; uint32_t default_bg; } colorscheme = {0xD4D4D4, 0x1e1e1e};
static uint32_t ansi_colors[] = {0x000000, 0xcd3131, 0x0dbc79, 0xe5e510, 0x2472c8, 0xbc3fbc, 0x11a8cd, 0xe5e5e5};
static uint32_t ansi_bright_colors[] = {0x000000, 0xcd3131, 0x0dbc79, 0xe5e510, 0x2472c8, 0xbc3fbc, 0x11a8cd, 0xe5e5e5};
"
	);
}

#[test]
fn unknown_color_name_fails() {
	let err = convert(Path::new("broken_name.toml"), Some(fixtures().as_path())).unwrap_err();
	assert!(matches!(err, ThemeError::UnknownColor { ref name, .. } if name == "purple"));
}

#[test]
fn directory_is_not_searched_without_flag() {
	let err = convert(Path::new("gruvbox_dark.toml"), None).unwrap_err();
	assert!(matches!(err, ThemeError::Io { .. }));
}

#[test]
fn binary_prints_three_lines() {
	let output = alacritty2fb()
		.arg("-d")
		.arg(fixtures())
		.arg("gruvbox_dark.toml")
		.env_remove("RUST_LOG")
		.output()
		.unwrap();
	assert!(output.status.success());
	assert_eq!(String::from_utf8(output.stdout).unwrap(), GRUVBOX);
	assert!(output.stderr.is_empty());
}

#[test]
fn binary_fails_without_partial_output() {
	let output = alacritty2fb()
		.arg("--directory")
		.arg(fixtures())
		.arg("broken_name.toml")
		.env_remove("RUST_LOG")
		.output()
		.unwrap();
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.contains("unknown color name 'purple'"), "stderr: {stderr}");
}

#[test]
fn binary_reports_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let output = alacritty2fb()
		.arg(dir.path().join("nope.toml"))
		.env_remove("RUST_LOG")
		.output()
		.unwrap();
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr).contains("I/O error reading"));
}
