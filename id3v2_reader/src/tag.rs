//! The decoded ID3v2 tag

#[cfg(test)]
mod tests;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::frame::FrameId;
use crate::header::{TagFlags, TagVersion};
use crate::util::text::{TextEncoding, decode_frame_text};

use std::collections::HashMap;
use std::io::Read;

const ARTIST_ID: &str = "TPE1";
const BAND_ID: &str = "TPE2";
const TITLE_ID: &str = "TIT2";
const ALBUM_ID: &str = "TALB";
const YEAR_ID: &str = "TYER";
const RECORDING_TIME_ID: &str = "TDRC";
const TRACK_NUMBER_ID: &str = "TRCK";
const COMMENT_ID: &str = "COMM";

/// An ID3v2 tag
///
/// A tag is created by [`Tag::read_from`] (or [`read_from`](crate::read_from)), and cannot be
/// modified afterwards.
///
/// Frames are stored as their raw content, and are only decoded when they are accessed. For
/// every frame accessed through this type, the first byte of the content is the text encoding.
/// See [`TextEncoding`].
///
/// ## Duplicate frames
///
/// Any frame ID can only appear once in a tag. If a tag contains multiple frames with the same
/// ID, the **last** one is kept.
///
/// # Examples
///
/// ```rust
/// use id3v2_reader::Tag;
/// use id3v2_reader::config::ParseOptions;
///
/// # fn main() -> id3v2_reader::error::Result<()> {
/// let mut tag_bytes = &[
/// 	b'I', b'D', b'3', 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x11, // Header
/// 	b'T', b'P', b'E', b'2', 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, // Frame header
/// 	0x00, b'X', b'a', b'n', b'd', b'e', b'r', // Frame content
/// ][..];
///
/// let tag = Tag::read_from(&mut tag_bytes, ParseOptions::new())?;
///
/// // There is no lead performer (TPE1), so the band (TPE2) is used
/// assert_eq!(tag.artist(), "Xander");
/// assert_eq!(tag.title(), "");
/// # Ok(()) }
/// ```
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Tag {
	version: TagVersion,
	flags: u8,
	frames: HashMap<FrameId, Vec<u8>>,
}

impl Tag {
	pub(crate) fn new(version: TagVersion, flags: u8, frames: HashMap<FrameId, Vec<u8>>) -> Self {
		Self {
			version,
			flags,
			frames,
		}
	}

	/// Read a tag from a reader
	///
	/// This is the same as [`read_from`](crate::read_from).
	///
	/// # Errors
	///
	/// See [`read_from`](crate::read_from)
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read,
	{
		crate::read::read_from(reader, parse_options)
	}

	/// The version of the tag, formatted as `2.<major>.<revision>`
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::config::ParseOptions;
	///
	/// # fn main() -> id3v2_reader::error::Result<()> {
	/// let mut tag_bytes = &b"ID3\x04\x00\x00\x00\x00\x00\x00"[..];
	///
	/// let tag = id3v2_reader::read_from(&mut tag_bytes, ParseOptions::new())?;
	/// assert_eq!(tag.version(), "2.4.0");
	/// # Ok(()) }
	/// ```
	pub fn version(&self) -> String {
		self.version.to_string()
	}

	/// The version of the tag, as stored in the header
	pub fn tag_version(&self) -> TagVersion {
		self.version
	}

	/// The flags of the tag
	pub fn flags(&self) -> TagFlags {
		TagFlags::from_byte(self.flags)
	}

	/// The flag byte of the tag, exactly as it appeared in the header
	pub fn raw_flags(&self) -> u8 {
		self.flags
	}

	/// The lead artist (`TPE1`)
	///
	/// If there is no lead artist, this falls back to the band (`TPE2`).
	pub fn artist(&self) -> String {
		match self.frame(ARTIST_ID) {
			Some(artist) => decode_frame_text(artist),
			None => self.text(BAND_ID),
		}
	}

	/// The title (`TIT2`)
	pub fn title(&self) -> String {
		self.text(TITLE_ID)
	}

	/// The album (`TALB`)
	pub fn album(&self) -> String {
		self.text(ALBUM_ID)
	}

	/// The year (`TYER`)
	///
	/// ID3v2.4 replaced `TYER` with `TDRC`, which is used if there is no `TYER` frame. Note that
	/// `TDRC` is a full timestamp (`yyyy-MM-ddTHH:mm:ss`), of which only the year may be present.
	pub fn year(&self) -> String {
		match self.frame(YEAR_ID) {
			Some(year) => decode_frame_text(year),
			None => self.text(RECORDING_TIME_ID),
		}
	}

	/// The track number (`TRCK`)
	///
	/// This may include the total number of tracks, ex. `1/12`.
	pub fn track_number(&self) -> String {
		self.text(TRACK_NUMBER_ID)
	}

	/// The comment (`COMM`)
	pub fn comment(&self) -> String {
		self.text(COMMENT_ID)
	}

	/// Decode the text of any frame
	///
	/// If the frame doesn't exist, this will be an empty string.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::config::ParseOptions;
	///
	/// # fn main() -> id3v2_reader::error::Result<()> {
	/// let mut tag_bytes = &[
	/// 	b'I', b'D', b'3', 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0E, // Header
	/// 	b'T', b'C', b'O', b'N', 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, // Frame header
	/// 	0x00, b'P', b'o', b'p', // Frame content
	/// ][..];
	///
	/// let tag = id3v2_reader::read_from(&mut tag_bytes, ParseOptions::new())?;
	/// assert_eq!(tag.text("TCON"), "Pop");
	/// assert_eq!(tag.text("TCOM"), "");
	/// # Ok(()) }
	/// ```
	pub fn text(&self, id: &str) -> String {
		self.frame(id).map(decode_frame_text).unwrap_or_default()
	}

	/// The raw content of a frame, including the text encoding byte
	pub fn frame(&self, id: &str) -> Option<&[u8]> {
		self.frames.get(id).map(Vec::as_slice)
	}

	/// The text encoding of a frame
	///
	/// This is `None` if the frame doesn't exist, or is empty.
	pub fn encoding(&self, id: &str) -> Option<TextEncoding> {
		self.frame(id)
			.and_then(<[u8]>::first)
			.map(|b| TextEncoding::from_discriminator(*b))
	}

	/// Whether the tag contains a frame with the ID
	pub fn contains(&self, id: &str) -> bool {
		self.frames.contains_key(id)
	}

	/// Returns an iterator over the IDs of the frames in the tag, in no particular order
	pub fn frame_ids(&self) -> impl Iterator<Item = &FrameId> {
		self.frames.keys()
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}
}
