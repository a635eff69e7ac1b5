use super::*;

#[test]
fn license_marker() {
	assert_eq!(Marker::parse("/* @license: mit */"), Some(Marker::License("mit")));
	assert_eq!(Marker::parse("/*@license:gpl3*/"), Some(Marker::License("gpl3")));
	assert_eq!(Marker::parse("/*   @license :  bsd2   */ int x;"), Some(Marker::License("bsd2")));
}

#[test]
fn missing_key_is_empty() {
	assert_eq!(Marker::parse("/* @license */"), Some(Marker::License("")));
}

#[test]
fn other_tags() {
	assert_eq!(Marker::parse("/* @author: someone */"), Some(Marker::Other("author")));
	assert_eq!(Marker::parse("/* @LICENSE: mit */"), Some(Marker::Other("LICENSE")));
}

#[test]
fn plain_comments_are_not_markers() {
	assert_eq!(Marker::parse("/* license: mit */"), None);
	assert_eq!(Marker::parse("/* SPDX-License-Identifier: MIT */"), None);
	assert_eq!(Marker::parse("/* */"), None);
}

#[test]
fn only_single_line_block_comments() {
	assert_eq!(Marker::parse("/* @license: mit"), None);
	assert_eq!(Marker::parse("// @license: mit"), None);
	assert_eq!(Marker::parse(" /* @license: mit */"), None);
	assert_eq!(Marker::parse("/*/ @license: mit"), None);
	assert_eq!(Marker::parse("#include <stddef.h>"), None);
	assert_eq!(Marker::parse(""), None);
}

#[test]
fn opt_out_keys() {
	assert!(Marker::License("none").is_opt_out());
	assert!(Marker::License("ignore").is_opt_out());
	assert!(!Marker::License("mit").is_opt_out());
	assert!(!Marker::Other("none").is_opt_out());
}
