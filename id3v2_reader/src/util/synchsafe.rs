//! Utilities for working with synchsafe integers
//!
//! The tag size in an ID3v2 header (and optionally the frame sizes in ID3v2.4, see
//! [`ParseOptions::synchsafe_frame_sizes`](crate::config::ParseOptions::synchsafe_frame_sizes))
//! are stored using only the lower 7 bits of each byte, so that they can never be mistaken for an MPEG frame sync.

/// An integer that can be converted from its synchsafe variant
pub trait SynchsafeInteger: Sized {
	/// Unsynchronise a synchsafe integer
	///
	/// The most significant bit of each byte is discarded.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::util::synchsafe::SynchsafeInteger;
	///
	/// // The bytes [0x00, 0x00, 0x02, 0x01] hold 2·2^7 + 1
	/// let synch_number = 0x0000_0201_u32;
	/// assert_eq!(synch_number.unsynch(), 257);
	///
	/// // Maximum value we can represent in a synchsafe u32
	/// assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0xFFF_FFFF);
	/// ```
	fn unsynch(self) -> Self;

	/// Whether every byte of the integer has its most significant bit unset
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_reader::util::synchsafe::SynchsafeInteger;
	///
	/// assert!(0x7F7F_7F7F_u32.is_synchsafe());
	/// assert!(!0x0000_0080_u32.is_synchsafe());
	/// ```
	fn is_synchsafe(self) -> bool;
}

impl SynchsafeInteger for u32 {
	fn unsynch(self) -> Self {
		((self & 0x7F00_0000) >> 3) | ((self & 0x7F_0000) >> 2) | ((self & 0x7F00) >> 1) | (self & 0x7F)
	}

	fn is_synchsafe(self) -> bool {
		self & 0x8080_8080 == 0
	}
}

#[cfg(test)]
mod tests {
	use super::SynchsafeInteger;

	use byteorder::{BigEndian, ByteOrder};

	fn decode_size(bytes: [u8; 4]) -> u32 {
		BigEndian::read_u32(&bytes).unsynch()
	}

	#[test_log::test]
	fn tag_size() {
		assert_eq!(decode_size([0x00, 0x00, 0x00, 0x16]), 22);
	}

	#[test_log::test]
	fn tag_size_matches_formula() {
		for bytes in [
			[0x00, 0x00, 0x00, 0x00],
			[0x00, 0x00, 0x01, 0x00],
			[0x01, 0x02, 0x03, 0x04],
			[0x7F, 0x7F, 0x7F, 0x7F],
			[0x12, 0x00, 0x7F, 0x40],
		] {
			let [b0, b1, b2, b3] = bytes.map(u32::from);
			assert_eq!(
				decode_size(bytes),
				b0 * (1 << 21) + b1 * (1 << 14) + b2 * (1 << 7) + b3
			);
		}
	}

	#[test_log::test]
	fn max_size() {
		assert_eq!(decode_size([0x7F; 4]), (1 << 28) - 1);
	}

	#[test_log::test]
	fn high_bits_are_discarded() {
		assert!(!0x0000_0080_u32.is_synchsafe());
		assert_eq!(0x0000_0080_u32.unsynch(), 0);
		assert_eq!(0xFFFF_FFFF_u32.unsynch(), (1 << 28) - 1);
	}
}
