#![no_main]

use id3v2_reader::config::{ParseOptions, ParsingMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let _ = id3v2_reader::read_from(
		&mut &data[..],
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	);
});
