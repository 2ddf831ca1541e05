//! A reader for the text frames of ID3v2 tags
//!
//! ID3v2 tags sit at the start of (usually MP3) files, and hold metadata in "frames". This crate
//! reads the tag header and its frames, and provides access to the common text fields.
//!
//! Tags of versions 2.2, 2.3, and 2.4 can be read. Only reading is supported.
//!
//! # Examples
//!
//! ## Reading a tag
//!
//! ```rust,no_run
//! use id3v2_reader::config::ParseOptions;
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut file = File::open("song.mp3")?;
//! let tag = id3v2_reader::read_from(&mut file, ParseOptions::new())?;
//!
//! println!("Version: {}", tag.version());
//! println!("Artist: {}", tag.artist());
//! println!("Title: {}", tag.title());
//! # Ok(()) }
//! ```
//!
//! ## Untagged input
//!
//! ```rust
//! use id3v2_reader::config::ParseOptions;
//!
//! let mut untagged = &b"\xFF\xFB\x90\x00"[..];
//!
//! let err = id3v2_reader::read_from(&mut untagged, ParseOptions::new()).unwrap_err();
//! assert!(err.is_no_tag_found());
//! ```
//!
//! # Parsing modes
//!
//! Real world tags are often broken. How much of that is tolerated is controlled by
//! [`ParsingMode`](config::ParsingMode), see [`config`].

pub mod config;
pub mod error;
mod frame;
mod header;
pub(crate) mod macros;
mod read;
pub mod tag;
pub mod util;

pub use crate::read::read_from;
pub use crate::tag::Tag;

pub use frame::FrameId;
pub use header::{TagFlags, TagVersion};
pub use util::text::TextEncoding;
