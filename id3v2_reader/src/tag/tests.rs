use crate::config::ParseOptions;
use crate::header::TagVersion;
use crate::util::text::TextEncoding;

use super::*;

use std::borrow::Cow;

fn tag_with(frames: &[(&'static str, &[u8])]) -> Tag {
	let frames = frames
		.iter()
		.map(|(id, content)| (FrameId::Valid(Cow::Borrowed(*id)), content.to_vec()))
		.collect();

	Tag::new(TagVersion::new(3, 0), 0, frames)
}

#[test_log::test]
fn named_accessors() {
	let tag = tag_with(&[
		("TPE1", &b"\x00Xander"[..]),
		("TIT2", &b"\x00Spice"[..]),
		("TALB", &b"\x00Things"[..]),
		("TYER", &b"\x002015"[..]),
		("COMM", &b"\x00say -v Xander"[..]),
		("TRCK", &b"\x001"[..]),
	]);

	assert_eq!(tag.version(), "2.3.0");
	assert_eq!(tag.artist(), "Xander");
	assert_eq!(tag.title(), "Spice");
	assert_eq!(tag.album(), "Things");
	assert_eq!(tag.year(), "2015");
	assert_eq!(tag.comment(), "say -v Xander");
	assert_eq!(tag.track_number(), "1");
}

#[test_log::test]
fn missing_frames_are_empty() {
	let tag = tag_with(&[]);

	assert!(tag.is_empty());
	assert_eq!(tag.artist(), "");
	assert_eq!(tag.title(), "");
	assert_eq!(tag.album(), "");
	assert_eq!(tag.year(), "");
	assert_eq!(tag.comment(), "");
	assert_eq!(tag.track_number(), "");
	assert_eq!(tag.frame("TIT2"), None);
	assert_eq!(tag.encoding("TIT2"), None);
}

#[test_log::test]
fn artist_falls_back_to_band() {
	let tag = tag_with(&[("TPE2", &b"\x00The Band"[..])]);
	assert_eq!(tag.artist(), "The Band");

	let tag = tag_with(&[("TPE1", &b"\x00Lead"[..]), ("TPE2", &b"\x00The Band"[..])]);
	assert_eq!(tag.artist(), "Lead");
}

#[test_log::test]
fn empty_lead_artist_does_not_fall_back() {
	let tag = tag_with(&[("TPE1", &b""[..]), ("TPE2", &b"\x00The Band"[..])]);
	assert_eq!(tag.artist(), "");
}

#[test_log::test]
fn year_falls_back_to_recording_time() {
	let tag = tag_with(&[("TDRC", &b"\x001984"[..])]);
	assert_eq!(tag.year(), "1984");

	let tag = tag_with(&[("TYER", &b"\x002015"[..]), ("TDRC", &b"\x001984"[..])]);
	assert_eq!(tag.year(), "2015");
}

#[test_log::test]
fn utf16_frames() {
	let tag = tag_with(&[
		("TIT2", &b"\x01\xFF\xFEH\x00i\x00"[..]),
		("TALB", &b"\x01\xFE\xFF\x00H\x00i"[..]),
	]);

	assert_eq!(tag.title(), "Hi");
	assert_eq!(tag.album(), "Hi");
	assert_eq!(tag.encoding("TIT2"), Some(TextEncoding::UTF16));
}

#[test_log::test]
fn raw_frame_access() {
	let tag = tag_with(&[("TCON", &b"\x00Pop\x00"[..])]);

	assert!(tag.contains("TCON"));
	assert!(!tag.contains("TIT2"));
	assert_eq!(tag.len(), 1);
	assert_eq!(tag.frame("TCON"), Some(&b"\x00Pop\x00"[..]));
	assert_eq!(tag.encoding("TCON"), Some(TextEncoding::Latin1));
	assert_eq!(tag.text("TCON"), "Pop");
	assert_eq!(
		tag.frame_ids().map(FrameId::as_str).collect::<Vec<_>>(),
		vec!["TCON"]
	);
}

#[test_log::test]
fn flags_are_preserved() {
	let mut tag_bytes = &b"ID3\x03\x00\xA0\x00\x00\x00\x00"[..];
	let tag = Tag::read_from(&mut tag_bytes, ParseOptions::new()).unwrap();

	assert_eq!(tag.raw_flags(), 0xA0);
	assert_eq!(tag.tag_version(), TagVersion::new(3, 0));

	let flags = tag.flags();
	assert!(flags.unsynchronisation);
	assert!(flags.experimental);
	assert!(!flags.extended_header);
	assert!(!flags.footer);
}
