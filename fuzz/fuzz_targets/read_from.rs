#![no_main]

use id3v2_reader::config::ParseOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(tag) = id3v2_reader::read_from(&mut &data[..], ParseOptions::new()) {
		let _ = tag.artist();
		let _ = tag.title();
		let _ = tag.album();
		let _ = tag.year();
		let _ = tag.track_number();
		let _ = tag.comment();
	}
});
