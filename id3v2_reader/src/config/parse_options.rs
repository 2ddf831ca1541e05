/// Options to control how a tag is parsed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) allocation_limit: usize,
	pub(crate) implicit_conversions: bool,
	pub(crate) synchsafe_frame_sizes: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	allocation_limit: 16 * 1024 * 1024,
	/// 	implicit_conversions: true,
	/// 	synchsafe_frame_sizes: false,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default allocation limit for any single frame
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
			implicit_conversions: true,
			synchsafe_frame_sizes: false,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// The maximum number of bytes to allocate for a single frame
	///
	/// A frame declaring a larger size is rejected with [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData).
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::config::ParseOptions;
	///
	/// // Only text frames are of interest, nothing should be anywhere near 1MB
	/// let parsing_options = ParseOptions::new().allocation_limit(1024 * 1024);
	/// ```
	pub fn allocation_limit(&mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		*self
	}

	/// Whether or not to upgrade outdated frame IDs
	///
	/// ID3v2.2 uses 3 character frame IDs (`TT2`, `TP1`, ...). When enabled, they are upgraded
	/// to their ID3v2.3 counterparts (`TIT2`, `TPE1`, ...), so the accessors on
	/// [`Tag`](crate::tag::Tag) work regardless of the tag version.
	///
	/// IDs without an ID3v2.3 counterpart are kept as-is.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::config::ParseOptions;
	///
	/// // I want the frames exactly as they appear in the tag
	/// let parsing_options = ParseOptions::new().implicit_conversions(false);
	/// ```
	pub fn implicit_conversions(&mut self, implicit_conversions: bool) -> Self {
		self.implicit_conversions = implicit_conversions;
		*self
	}

	/// Whether or not to read ID3v2.4 frame sizes as synchsafe integers
	///
	/// By default, frame sizes are plain big-endian integers in every version. Taggers that
	/// follow the ID3v2.4 standard write synchsafe frame sizes, which only differ from plain ones
	/// for frames of 128 bytes or more.
	///
	/// This has no effect on ID3v2.2 and ID3v2.3 tags.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::config::ParseOptions;
	///
	/// // The input was written by a tagger that follows ID3v2.4 to the letter
	/// let parsing_options = ParseOptions::new().synchsafe_frame_sizes(true);
	/// ```
	pub fn synchsafe_frame_sizes(&mut self, synchsafe_frame_sizes: bool) -> Self {
		self.synchsafe_frame_sizes = synchsafe_frame_sizes;
		*self
	}
}

/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust
/// use id3v2_reader::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> id3v2_reader::error::Result<()> {
/// let mut tag_bytes = &b"ID3\x03\x00\x00\x00\x00\x00\x00"[..];
///
/// // We only want to read standard-compliant inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let tag = id3v2_reader::read_from(&mut tag_bytes, parsing_options)?;
/// assert!(tag.is_empty());
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * Unknown major version - The parser will error and the entire input is discarded
	/// * Invalid frame ID - The parser will error and the entire input is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * Unknown major version - The frames will be read using the ID3v2.3 layout
	/// * Invalid frame ID - The frame is discarded and the parser moves on
	/// * Frame size overrunning the tag - The parser stops, keeping all frames read up to that point
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// This currently behaves the same as [`ParsingMode::BestAttempt`].
	Relaxed,
}
