use crate::config::ParseOptions;
use crate::error::Result;
use crate::frame::read::ParsedFrame;
use crate::frame::{FrameId, FrameLayout};
use crate::header::Id3v2Header;
use crate::tag::Tag;

use std::collections::HashMap;
use std::io::Read;

/// Read an ID3v2 tag from a reader
///
/// The reader must be positioned at the start of the tag, which is usually the start of the file.
/// On success, the reader is left positioned directly after the tag.
///
/// # Errors
///
/// * The reader does not start with an ID3v2 tag ([`Id3Error::is_no_tag_found`](crate::error::Id3Error::is_no_tag_found))
/// * The reader ends before the declared tag size ([`Id3Error::is_truncated`](crate::error::Id3Error::is_truncated))
/// * A frame is larger than [`ParseOptions::allocation_limit`]
/// * With [`ParsingMode::Strict`](crate::config::ParsingMode::Strict), the tag contains invalid data
///
/// # Examples
///
/// ```rust
/// use id3v2_reader::config::ParseOptions;
///
/// # fn main() -> id3v2_reader::error::Result<()> {
/// let mut tag_bytes = &[
/// 	b'I', b'D', b'3', 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0D, // Header
/// 	b'T', b'I', b'T', b'2', 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, // Frame header
/// 	0x00, b'H', b'i', // Frame content
/// ][..];
///
/// let tag = id3v2_reader::read_from(&mut tag_bytes, ParseOptions::new())?;
/// assert_eq!(tag.version(), "2.3.0");
/// assert_eq!(tag.title(), "Hi");
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Tag>
where
	R: Read,
{
	let header = Id3v2Header::parse(reader, parse_options)?;
	parse_id3v2(reader, header, parse_options)
}

pub(crate) fn parse_id3v2<R>(
	bytes: &mut R,
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Tag>
where
	R: Read,
{
	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {}",
		header.size,
		header.version
	);

	let mut tag_bytes = bytes.take(u64::from(header.size));
	let frames = read_all_frames(&mut tag_bytes, header, parse_options)?;

	// Throw away the rest of the tag (padding, bad frames)
	let discarded = std::io::copy(&mut tag_bytes, &mut std::io::sink())?;
	log::trace!(
		"Discarded {discarded} bytes of padding, tag ends at offset {}",
		header.full_tag_size()
	);

	Ok(Tag::new(header.version, header.flags, frames))
}

fn read_all_frames<R>(
	reader: &mut R,
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<HashMap<FrameId, Vec<u8>>>
where
	R: Read,
{
	let layout = FrameLayout::for_version(header.version, parse_options.synchsafe_frame_sizes);
	let mut remaining = u64::from(header.size);
	let mut frames = HashMap::new();

	loop {
		match ParsedFrame::read(reader, layout, &mut remaining, parse_options)? {
			ParsedFrame::Next { id, content } => {
				if let Some(replaced) = frames.insert(id, content) {
					log::warn!(
						"Replaced a frame ({} bytes) by a later frame with the same ID",
						replaced.len()
					);
				}
			},
			// Padding, empty, or invalid frames, but we can expect more frames
			ParsedFrame::Skip => continue,
			// Either the region is exhausted, or the rest of it can't be parsed
			ParsedFrame::Eof => break,
		}
	}

	Ok(frames)
}
