/// The text encoding of an ID3v2 text frame
///
/// The first byte of every text frame payload selects the encoding of the rest.
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a frame's leading byte
	///
	/// Only `0` selects Latin-1, any other value is treated as UTF-16.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_discriminator(0), TextEncoding::Latin1);
	/// assert_eq!(TextEncoding::from_discriminator(1), TextEncoding::UTF16);
	/// assert_eq!(TextEncoding::from_discriminator(3), TextEncoding::UTF16);
	/// ```
	pub fn from_discriminator(byte: u8) -> Self {
		match byte {
			0 => Self::Latin1,
			_ => Self::UTF16,
		}
	}
}

/// Decode a full text frame payload, including its encoding byte
pub(crate) fn decode_frame_text(payload: &[u8]) -> String {
	let Some((&discriminator, text)) = payload.split_first() else {
		return String::new();
	};

	match TextEncoding::from_discriminator(discriminator) {
		TextEncoding::Latin1 => latin1_decode(text),
		TextEncoding::UTF16 => utf16_decode_bytes(text),
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let mut text = bytes.iter().map(|c| char::from(*c)).collect::<String>();
	trim_end_nulls(&mut text);
	trim_start_nulls(&mut text);
	text
}

/// Decode UTF-16 text, with the byte order selected by its BOM
///
/// Anything other than a big-endian BOM (`0xFE 0xFF`) selects little-endian. The BOM is decoded
/// along with the rest, and the first character is then dropped.
pub(crate) fn utf16_decode_bytes(bytes: &[u8]) -> String {
	let endianness: fn([u8; 2]) -> u16 = match bytes {
		[0xFE, 0xFF, ..] => u16::from_be_bytes,
		_ => u16::from_le_bytes,
	};

	let chunks = bytes.chunks_exact(2);
	let odd_byte = !chunks.remainder().is_empty();

	let mut words = chunks
		.map(|c| endianness([c[0], c[1]]))
		.collect::<Vec<u16>>();

	if odd_byte {
		log::trace!("UTF-16 string has an odd length, replacing the final byte");
		words.push(REPLACEMENT_WORD);
	}

	utf16_decode(&words)
}

const REPLACEMENT_WORD: u16 = 0xFFFD;

pub(crate) fn utf16_decode(words: &[u16]) -> String {
	let mut text = char::decode_utf16(words.iter().copied())
		.map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
		.skip(1)
		.collect::<String>();

	trim_end_nulls(&mut text);
	text
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}

pub(crate) fn trim_start_nulls(text: &mut String) {
	if text.starts_with('\0') {
		let start = text.len() - text.trim_start_matches('\0').len();
		text.drain(..start);
	}
}

#[cfg(test)]
mod tests {
	use super::decode_frame_text;

	const TEST_STRING: &str = "l\u{00f8}ft\u{00a5}";

	#[test_log::test]
	fn empty_payload() {
		assert_eq!(decode_frame_text(&[]), "");
		assert_eq!(decode_frame_text(&[0x00]), "");
		assert_eq!(decode_frame_text(&[0x01]), "");
	}

	#[test_log::test]
	fn latin1_strips_nulls() {
		assert_eq!(decode_frame_text(&[0x00, b'H', b'i', 0x00, 0x00]), "Hi");
		assert_eq!(decode_frame_text(&[0x00, 0x00, 0x00, b'H', b'i']), "Hi");
		assert_eq!(decode_frame_text(&[0x00, 0x00, 0x00, 0x00]), "");
	}

	#[test_log::test]
	fn latin1_high_bytes() {
		assert_eq!(
			decode_frame_text(&[0x00, 0x6C, 0xF8, 0x66, 0x74, 0xA5]),
			TEST_STRING
		);
	}

	#[test_log::test]
	fn utf16_little_endian() {
		assert_eq!(
			decode_frame_text(&[0x01, 0xFF, 0xFE, b'H', 0x00, b'i', 0x00]),
			"Hi"
		);
	}

	#[test_log::test]
	fn utf16_big_endian() {
		let be = decode_frame_text(&[
			0x01, 0xFE, 0xFF, 0x00, 0x6C, 0x00, 0xF8, 0x00, 0x66, 0x00, 0x74, 0x00, 0xA5,
		]);
		let le = decode_frame_text(&[
			0x01, 0xFF, 0xFE, 0x6C, 0x00, 0xF8, 0x00, 0x66, 0x00, 0x74, 0x00, 0xA5, 0x00,
		]);

		assert_eq!(be, TEST_STRING);
		assert_eq!(be, le);
	}

	#[test_log::test]
	fn utf16_terminator_stripped() {
		assert_eq!(
			decode_frame_text(&[0x01, 0xFF, 0xFE, b'H', 0x00, b'i', 0x00, 0x00, 0x00]),
			"Hi"
		);
	}

	#[test_log::test]
	fn utf16_odd_length() {
		assert_eq!(
			decode_frame_text(&[0x01, 0xFF, 0xFE, b'H', 0x00, b'i']),
			"H\u{FFFD}"
		);
	}

	#[test_log::test]
	fn utf16_missing_bom_drops_first_character() {
		assert_eq!(
			decode_frame_text(&[0x01, b'X', 0x00, b'H', 0x00, b'i', 0x00]),
			"Hi"
		);
	}

	#[test_log::test]
	fn utf16_surrogate_pair() {
		// U+1F3B5, MUSICAL NOTE
		assert_eq!(
			decode_frame_text(&[0x01, 0xFF, 0xFE, 0x3C, 0xD8, 0xB5, 0xDF]),
			"\u{1F3B5}"
		);
	}

	#[test_log::test]
	fn utf16_unpaired_surrogate() {
		assert_eq!(
			decode_frame_text(&[0x01, 0xFF, 0xFE, 0x3C, 0xD8, b'a', 0x00]),
			"\u{FFFD}a"
		);
	}

	#[test_log::test]
	fn any_nonzero_discriminator_is_utf16() {
		assert_eq!(
			decode_frame_text(&[0x03, 0xFF, 0xFE, b'H', 0x00, b'i', 0x00]),
			"Hi"
		);
	}
}
