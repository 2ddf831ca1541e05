use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{err, id3v2_err, parse_mode_choice};
use crate::util::synchsafe::SynchsafeInteger;

use std::fmt::{Display, Formatter};
use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The size of an ID3v2 tag header
pub(crate) const HEADER_SIZE: usize = 10;

/// The version of an ID3v2 tag
///
/// The header stores the version as two bytes: `[major, revision]`. This displays as
/// `2.<major>.<revision>`, so an ID3v2.3 tag with no revisions displays as `2.3.0`.
///
/// # Examples
///
/// ```rust
/// use id3v2_reader::TagVersion;
///
/// let version = TagVersion::new(3, 0);
/// assert_eq!(version.to_string(), "2.3.0");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagVersion {
	/// The major version (`3` for ID3v2.3)
	pub major: u8,
	/// The revision
	pub revision: u8,
}

impl TagVersion {
	/// Create a new `TagVersion`
	pub const fn new(major: u8, revision: u8) -> Self {
		Self { major, revision }
	}
}

impl Display for TagVersion {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "2.{}.{}", self.major, self.revision)
	}
}

/// Flags that apply to the entire tag
///
/// These are only a view of the raw flag byte, none of them change how the tag is read.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagFlags {
	/// Whether or not all frames are unsynchronised
	pub unsynchronisation: bool,
	/// Whether the header is followed by an extended header
	///
	/// In ID3v2.2, this bit instead marks the tag as compressed.
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer (ID3v2.4)
	pub footer: bool,
}

impl TagFlags {
	/// Parse the flags from the header's flag byte
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::TagFlags;
	///
	/// let flags = TagFlags::from_byte(0b1010_0000);
	/// assert!(flags.unsynchronisation);
	/// assert!(flags.experimental);
	/// assert!(!flags.footer);
	/// ```
	pub fn from_byte(byte: u8) -> Self {
		Self {
			unsynchronisation: byte & 0x80 == 0x80,
			extended_header: byte & 0x40 == 0x40,
			experimental: byte & 0x20 == 0x20,
			footer: byte & 0x10 == 0x10,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Id3v2Header {
	pub version: TagVersion,
	pub flags: u8,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER**)
	pub size: u32,
}

impl Id3v2Header {
	pub(crate) fn parse<R>(bytes: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; HEADER_SIZE];

		// An input too short to even hold the magic can't be tagged
		if let Err(e) = bytes.read_exact(&mut header[..3]) {
			if e.kind() == std::io::ErrorKind::UnexpectedEof {
				err!(NoTagFound);
			}

			return Err(e.into());
		}

		if &header[..3] != b"ID3" {
			err!(NoTagFound);
		}

		bytes.read_exact(&mut header[3..])?;

		let version = TagVersion::new(header[3], header[4]);
		let parse_mode = parse_options.parsing_mode;
		if !(2..=4).contains(&version.major) {
			parse_mode_choice!(
				parse_mode,
				STRICT: id3v2_err!(BadId3v2Version(version.major, version.revision)),
				DEFAULT: log::warn!(
					"Found an unknown ID3v2 version ({version}), reading frames as ID3v2.3"
				)
			);
		}

		let flags = header[5];

		let raw_size = BigEndian::read_u32(&header[6..]);
		if !raw_size.is_synchsafe() {
			parse_mode_choice!(
				parse_mode,
				STRICT: id3v2_err!(BadSyncsafeInteger),
				DEFAULT: log::warn!("Tag size is not synchsafe, discarding the high bits")
			);
		}

		let size = raw_size.unsynch();

		log::debug!("Found an ID3v2 tag, version: {version}, flags: {flags:#04X}, size: {size}");

		Ok(Id3v2Header {
			version,
			flags,
			size,
		})
	}

	/// The total size of the tag, including the header
	pub(crate) fn full_tag_size(self) -> u64 {
		u64::from(self.size) + HEADER_SIZE as u64
	}
}

#[cfg(test)]
mod tests {
	use super::{Id3v2Header, TagVersion};
	use crate::config::{ParseOptions, ParsingMode};
	use crate::error::{ErrorKind, Id3v2ErrorKind};

	use std::io::Read;

	fn parse(bytes: &[u8], parsing_mode: ParsingMode) -> crate::error::Result<Id3v2Header> {
		let mut reader = bytes;
		Id3v2Header::parse(
			&mut reader,
			ParseOptions::new().parsing_mode(parsing_mode),
		)
	}

	#[test_log::test]
	fn parse_v23_header() {
		let header = parse(
			b"ID3\x03\x00\x40\x00\x00\x02\x01",
			ParsingMode::BestAttempt,
		)
		.unwrap();

		assert_eq!(header.version, TagVersion::new(3, 0));
		assert_eq!(header.version.to_string(), "2.3.0");
		assert_eq!(header.flags, 0x40);
		assert_eq!(header.size, 257);
		assert_eq!(header.full_tag_size(), 267);
	}

	#[test_log::test]
	fn header_consumes_ten_bytes() {
		let mut reader = &b"ID3\x04\x00\x00\x00\x00\x00\x16rest"[..];
		let header = Id3v2Header::parse(&mut reader, ParseOptions::new()).unwrap();
		assert_eq!(header.size, 22);

		let mut rest = Vec::new();
		reader.read_to_end(&mut rest).unwrap();
		assert_eq!(rest, b"rest");
	}

	#[test_log::test]
	fn missing_magic() {
		let err = parse(b"TAG\x03\x00\x00\x00\x00\x00\x00", ParsingMode::Strict).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::NoTagFound));

		let err = parse(b"ID", ParsingMode::BestAttempt).unwrap_err();
		assert!(err.is_no_tag_found());

		let err = parse(b"", ParsingMode::BestAttempt).unwrap_err();
		assert!(err.is_no_tag_found());
	}

	#[test_log::test]
	fn truncated_header() {
		let err = parse(b"ID3\x03\x00", ParsingMode::BestAttempt).unwrap_err();
		assert!(err.is_truncated());
	}

	#[test_log::test]
	fn unknown_version() {
		let bytes = b"ID3\x07\x01\x00\x00\x00\x00\x00";

		let header = parse(bytes, ParsingMode::BestAttempt).unwrap();
		assert_eq!(header.version.to_string(), "2.7.1");

		let err = parse(bytes, ParsingMode::Strict).unwrap_err();
		assert!(matches!(
			err.kind(),
			ErrorKind::Id3v2(e) if matches!(e.kind(), Id3v2ErrorKind::BadId3v2Version(7, 1))
		));
	}

	#[test_log::test]
	fn size_not_synchsafe() {
		let bytes = b"ID3\x03\x00\x00\x00\x00\x01\x80";

		let header = parse(bytes, ParsingMode::Relaxed).unwrap();
		assert_eq!(header.size, 128);

		let err = parse(bytes, ParsingMode::Strict).unwrap_err();
		assert!(matches!(
			err.kind(),
			ErrorKind::Id3v2(e) if matches!(e.kind(), Id3v2ErrorKind::BadSyncsafeInteger)
		));
	}
}
