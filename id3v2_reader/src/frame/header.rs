use super::FrameLayout;
use crate::error::Result;
use crate::util::synchsafe::SynchsafeInteger;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// A frame header, as it appears in the tag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawFrameHeader {
	id: [u8; 4],
	id_len: usize,
	pub size: u32,
}

impl RawFrameHeader {
	/// Read a frame header using the provided layout
	///
	/// The frame flags are discarded, if the layout has any.
	pub(crate) fn parse<R>(reader: &mut R, layout: FrameLayout) -> Result<Self>
	where
		R: Read,
	{
		let mut header = [0; 10];
		let header = &mut header[..layout.header_len()];
		reader.read_exact(header)?;

		let mut id = [0; 4];
		let mut id_len = layout.id_len;
		id[..id_len].copy_from_slice(&header[..id_len]);

		let size_bytes = &header[layout.id_len..layout.id_len + layout.size_len];
		let size = match layout.size_len {
			3 => BigEndian::read_u24(size_bytes),
			_ => {
				let size = BigEndian::read_u32(size_bytes);
				if layout.synchsafe_size {
					size.unsynch()
				} else {
					size
				}
			},
		};

		// For some reason, some apps make v3 tags with v2 frame IDs.
		// The actual frame header is v3 though
		if id_len == 4 && !layout.synchsafe_size && id[3] == 0 && id[0] != 0 {
			log::warn!("Found a v2 frame ID in a v3 tag, attempting to upgrade");
			id_len = 3;
		}

		if layout.has_flags {
			log::trace!(
				"Discarding frame flags: {:#06X}",
				BigEndian::read_u16(&header[header.len() - 2..])
			);
		}

		Ok(Self { id, id_len, size })
	}

	pub(crate) fn id_bytes(&self) -> &[u8] {
		&self.id[..self.id_len]
	}

	/// Whether the ID is made up of null bytes, marking the start of the padding
	pub(crate) fn is_padding(&self) -> bool {
		self.id == [0; 4]
	}
}
