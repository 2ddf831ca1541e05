use super::header::RawFrameHeader;
use super::{FrameId, FrameLayout};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{parse_mode_choice, try_vec};
use crate::util::upgrade_v2;

use std::borrow::Cow;
use std::io::Read;

pub(crate) enum ParsedFrame {
	Next { id: FrameId, content: Vec<u8> },
	Skip,
	Eof,
}

impl ParsedFrame {
	/// Read the next frame
	///
	/// `remaining` is the number of unread bytes in the frame region, and is reduced by every
	/// byte consumed.
	pub(crate) fn read<R>(
		reader: &mut R,
		layout: FrameLayout,
		remaining: &mut u64,
		parse_options: ParseOptions,
	) -> Result<Self>
	where
		R: Read,
	{
		let header_len = layout.header_len() as u64;
		if *remaining < header_len {
			log::trace!("{} bytes remaining, too small for a frame header", *remaining);
			return Ok(Self::Eof);
		}

		let header = RawFrameHeader::parse(reader, layout)?;
		*remaining -= header_len;

		let size = u64::from(header.size);
		if size > *remaining {
			log::warn!(
				"Frame size ({size}) exceeds the remaining tag size ({}), stopping",
				*remaining
			);
			return Ok(Self::Eof);
		}

		let mut content = try_vec![0; header.size as usize, parse_options.allocation_limit];
		reader.read_exact(&mut content)?;
		*remaining -= size;

		if header.is_padding() || size == 0 {
			log::trace!("Encountered padding or an empty frame, skipping");
			return Ok(Self::Skip);
		}

		let id = match FrameId::from_bytes(header.id_bytes()) {
			Ok(id) => id,
			Err(err) => {
				let parse_mode = parse_options.parsing_mode;
				parse_mode_choice!(
					parse_mode,
					STRICT: return Err(err),
					DEFAULT: {
						log::warn!("Failed to read frame header, skipping: {}", err);
						return Ok(Self::Skip);
					}
				)
			},
		};

		let id = if parse_options.implicit_conversions && id.is_outdated() {
			match upgrade_v2(id.as_str()) {
				Some(upgraded) => {
					log::trace!("Upgraded frame ID \"{id}\" to \"{upgraded}\"");
					FrameId::Valid(Cow::Borrowed(upgraded))
				},
				None => id,
			}
		} else {
			id
		};

		log::trace!("Read frame \"{id}\", size: {size}");
		Ok(Self::Next { id, content })
	}
}
