//! Contains the errors that can arise while reading a tag
//!
//! The primary error is [`Id3Error`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3Error>`
pub type Result<T> = std::result::Result<T, Id3Error>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The input does not start with an ID3v2 tag
	///
	/// This is the expected outcome for untagged files, and can be checked with
	/// [`Id3Error::is_no_tag_found`].
	NoTagFound,
	/// Attempting to read an abnormally large amount of data
	///
	/// See [`ParseOptions::allocation_limit`](crate::config::ParseOptions::allocation_limit).
	TooMuchData,
	/// Errors that arise while reading ID3v2 tags
	Id3v2(Id3v2Error),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	///
	/// A stream that ends before a required read is satisfied is reported here, see
	/// [`Id3Error::is_truncated`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// The types of errors that can occur while decoding ID3v2 data
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// Arises when an invalid ID3v2 version is found with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict)
	BadId3v2Version(u8, u8),
	/// Arises when a synchsafe integer has a byte with its most significant bit set
	BadSyncsafeInteger,

	// Frame
	/// Arises when a frame ID contains invalid characters (must be within `'A'..'Z'` or `'0'..'9'`)
	/// or if the ID is too short/long.
	BadFrameId(Vec<u8>),
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadId3v2Version(major, minor) => write!(
				f,
				"Found an invalid version (v{major}.{minor}), expected any major revision in: (2, \
				 3, 4)"
			),
			Self::BadSyncsafeInteger => write!(
				f,
				"Found a synchsafe integer with the most significant bit of a byte set"
			),
			Self::BadFrameId(frame_id) => write!(f, "Failed to parse a frame ID: 0x{frame_id:x?}"),
		}
	}
}

/// An error that arises while decoding an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur while reading a tag
pub struct Id3Error {
	pub(crate) kind: ErrorKind,
}

impl Id3Error {
	/// Create an `Id3Error` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::error::{ErrorKind, Id3Error};
	///
	/// let no_tag = Id3Error::new(ErrorKind::NoTagFound);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::error::{ErrorKind, Id3Error};
	///
	/// let no_tag = Id3Error::new(ErrorKind::NoTagFound);
	/// if let ErrorKind::NoTagFound = no_tag.kind() {
	/// 	println!("This file is untagged");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Whether the input simply had no tag
	///
	/// Untagged files are common, so callers will usually treat this as a normal outcome.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::config::ParseOptions;
	///
	/// let mut untagged = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..];
	///
	/// let err = id3v2_reader::read_from(&mut untagged, ParseOptions::new()).unwrap_err();
	/// assert!(err.is_no_tag_found());
	/// ```
	pub fn is_no_tag_found(&self) -> bool {
		matches!(self.kind, ErrorKind::NoTagFound)
	}

	/// Whether the input ended before a required read could be satisfied
	pub fn is_truncated(&self) -> bool {
		matches!(
			self.kind,
			ErrorKind::Io(ref err) if err.kind() == std::io::ErrorKind::UnexpectedEof
		)
	}
}

impl std::error::Error for Id3Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			ErrorKind::Alloc(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Id3Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for Id3Error {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<std::io::Error> for Id3Error {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<TryReserveError> for Id3Error {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for Id3Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::NoTagFound => write!(f, "No tag found"),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{ErrorKind, Id3Error, Id3v2Error, Id3v2ErrorKind};

	#[test_log::test]
	fn truncated_stream_is_detected() {
		let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
		let err = Id3Error::from(eof);

		assert!(err.is_truncated());
		assert!(!err.is_no_tag_found());
	}

	#[test_log::test]
	fn display_messages() {
		assert_eq!(
			Id3Error::new(ErrorKind::NoTagFound).to_string(),
			"No tag found"
		);

		let bad_version: Id3Error =
			Id3v2Error::new(Id3v2ErrorKind::BadId3v2Version(7, 0)).into();
		assert_eq!(
			bad_version.to_string(),
			"ID3v2: Found an invalid version (v7.0), expected any major revision in: (2, 3, 4)"
		);
	}
}
