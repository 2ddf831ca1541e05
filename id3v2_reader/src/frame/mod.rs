pub(crate) mod header;
pub(crate) mod read;

use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::header::TagVersion;

use std::borrow::{Borrow, Cow};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// An `ID3v2` frame ID
///
/// IDs are 4 characters in ID3v2.3/4, and 3 characters in ID3v2.2. Outdated IDs are upgraded
/// while reading where possible, see [`ParseOptions::implicit_conversions`](crate::config::ParseOptions::implicit_conversions).
#[derive(PartialEq, Clone, Debug, Eq)]
pub enum FrameId {
	/// A valid `ID3v2.3/4` frame
	Valid(Cow<'static, str>),
	/// When an `ID3v2.2` key couldn't be upgraded
	Outdated(Cow<'static, str>),
}

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// NOTE: This will not upgrade IDs.
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is an invalid length (must be 3 or 4)
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::FrameId;
	///
	/// # fn main() -> id3v2_reader::error::Result<()> {
	/// let title = FrameId::new("TIT2")?;
	/// assert_eq!(title.as_str(), "TIT2");
	///
	/// assert!(FrameId::new("tit2").is_err());
	/// assert!(FrameId::new("TITLE").is_err());
	/// # Ok(()) }
	/// ```
	pub fn new<I>(id: I) -> Result<Self>
	where
		I: Into<Cow<'static, str>>,
	{
		Self::new_cow(id.into())
	}

	// Split from generic, public method to avoid code bloat by monomorphization.
	pub(crate) fn new_cow(id: Cow<'static, str>) -> Result<Self> {
		Self::verify_id(&id)?;

		match id.len() {
			3 => Ok(FrameId::Outdated(id)),
			4 => Ok(FrameId::Valid(id)),
			_ => Err(
				Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id.into_owned().into_bytes())).into(),
			),
		}
	}

	/// Create a `FrameId` from the raw bytes of a frame header
	pub(crate) fn from_bytes(id_bytes: &[u8]) -> Result<Self> {
		let bad_id = || Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id_bytes.to_vec()));

		// Only ASCII is valid, so each byte is a character
		if !id_bytes.iter().all(u8::is_ascii) {
			return Err(bad_id().into());
		}

		let id_str = id_bytes.iter().map(|b| char::from(*b)).collect::<String>();
		Self::new_cow(Cow::Owned(id_str))
	}

	/// Whether this frame ID represents an outdated (ID3v2.2) ID
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::FrameId;
	///
	/// # fn main() -> id3v2_reader::error::Result<()> {
	/// let id_valid = FrameId::new("TPE1")?;
	/// assert!(!id_valid.is_outdated());
	///
	/// let id_outdated = FrameId::new("TP1")?;
	/// assert!(id_outdated.is_outdated());
	/// # Ok(()) }
	/// ```
	pub fn is_outdated(&self) -> bool {
		matches!(self, FrameId::Outdated(_))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		match self {
			FrameId::Valid(v) | FrameId::Outdated(v) => v,
		}
	}

	fn verify_id(id_str: &str) -> Result<()> {
		for c in id_str.chars() {
			if !c.is_ascii_uppercase() && !c.is_ascii_digit() {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameId(
					id_str.as_bytes().to_vec(),
				))
				.into());
			}
		}

		Ok(())
	}
}

// Hashed as the bare string, so the frame map can be queried with a `&str`
impl Hash for FrameId {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_str().hash(state);
	}
}

impl Borrow<str> for FrameId {
	fn borrow(&self) -> &str {
		self.as_str()
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<&'static str> for FrameId {
	type Error = crate::error::Id3Error;

	fn try_from(value: &'static str) -> Result<Self> {
		Self::new(value)
	}
}

/// The layout of a frame header, which depends on the tag version
///
/// | Version  | ID      | Size     | Flags   |
/// |----------|---------|----------|---------|
/// | ID3v2.2  | 3 bytes | 3 bytes  | None    |
/// | ID3v2.3  | 4 bytes | 4 bytes  | 2 bytes |
/// | ID3v2.4  | 4 bytes | 4 bytes  | 2 bytes |
///
/// Sizes are plain big-endian integers. ID3v2.4 sizes are only read as synchsafe when
/// [`ParseOptions::synchsafe_frame_sizes`](crate::config::ParseOptions::synchsafe_frame_sizes)
/// is enabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameLayout {
	pub id_len: usize,
	pub size_len: usize,
	pub synchsafe_size: bool,
	pub has_flags: bool,
}

impl FrameLayout {
	const V2: Self = Self {
		id_len: 3,
		size_len: 3,
		synchsafe_size: false,
		has_flags: false,
	};
	const V3: Self = Self {
		id_len: 4,
		size_len: 4,
		synchsafe_size: false,
		has_flags: true,
	};
	const V4_SYNCHSAFE: Self = Self {
		synchsafe_size: true,
		..Self::V3
	};

	/// Unknown major versions are assumed to use the ID3v2.3 layout
	///
	/// ID3v2.4 shares the ID3v2.3 layout, unless `synchsafe_v4_sizes` is set.
	pub(crate) fn for_version(version: TagVersion, synchsafe_v4_sizes: bool) -> Self {
		match version.major {
			2 => Self::V2,
			4 if synchsafe_v4_sizes => Self::V4_SYNCHSAFE,
			_ => Self::V3,
		}
	}

	/// The full size of a frame header
	pub(crate) fn header_len(self) -> usize {
		self.id_len + self.size_len + if self.has_flags { 2 } else { 0 }
	}
}
