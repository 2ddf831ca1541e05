//! Utilities for upgrading old ID3v2 frame IDs

use std::collections::HashMap;
use std::sync::OnceLock;

/// Upgrade an ID3v2.2 key to an ID3v2.3 key
///
/// # Examples
///
/// ```rust
/// use id3v2_reader::util::upgrade_v2;
///
/// let old_title = "TT2";
/// let new_title = upgrade_v2(old_title);
///
/// assert_eq!(new_title, Some("TIT2"));
/// ```
pub fn upgrade_v2(key: &str) -> Option<&'static str> {
	v2keys().get(key).copied()
}

macro_rules! gen_upgrades {
	(V2 => [$($($v2_key:literal)|* => $id3v23_from_v2:literal),+ $(,)?]) => {
		fn v2keys() -> &'static HashMap<&'static str, &'static str> {
			static INSTANCE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
			INSTANCE.get_or_init(|| {
				let mut map = HashMap::new();
				$(
					$(
						map.insert($v2_key, $id3v23_from_v2);
					)+
				)+
				map
			})
		}
	};
}

gen_upgrades!(
	// ID3v2.2 => ID3v2.3
	V2 => [
		// Standard frames
		"BUF" => "RBUF",
		"CNT" => "PCNT",
		"COM" => "COMM",
		"CRA" => "AENC",
		"ETC" => "ETCO",
		"GEO" => "GEOB",
		"IPL" => "IPLS",
		"MCI" => "MCDI",
		"MLL" => "MLLT",
		"PIC" => "APIC",
		"POP" => "POPM",
		"REV" => "RVRB",
		"SLT" => "SYLT",
		"STC" => "SYTC",
		"TAL" => "TALB",
		"TBP" => "TBPM",
		"TCM" => "TCOM",
		"TCO" => "TCON",
		"TCR" => "TCOP",
		"TDA" => "TDAT",
		"TDY" => "TDLY",
		"TEN" => "TENC",
		"TFT" => "TFLT",
		"TIM" => "TIME",
		"TKE" => "TKEY",
		"TLA" => "TLAN",
		"TLE" => "TLEN",
		"TMT" => "TMED",
		"TOA" => "TOPE",
		"TOF" => "TOFN",
		"TOL" => "TOLY",
		"TOR" => "TORY",
		"TOT" => "TOAL",
		"TP1" => "TPE1",
		"TP2" => "TPE2",
		"TP3" => "TPE3",
		"TP4" => "TPE4",
		"TPA" => "TPOS",
		"TPB" => "TPUB",
		"TRC" => "TSRC",
		"TRD" => "TRDA",
		"TRK" => "TRCK",
		"TSI" => "TSIZ",
		"TSS" => "TSSE",
		"TT1" => "TIT1",
		"TT2" => "TIT2",
		"TT3" => "TIT3",
		"TXT" => "TEXT",
		"TXX" => "TXXX",
		"TYE" => "TYER",
		"UFI" => "UFID",
		"ULT" => "USLT",
		"WAF" => "WOAF",
		"WAR" => "WOAR",
		"WAS" => "WOAS",
		"WCM" => "WCOM",
		"WCP" => "WCOP",
		"WPB" => "WPUB",
		"WXX" => "WXXX",

		// iTunes non-standard frames
		"TCP" => "TCMP",
		"TS2" => "TSO2",
		"TSA" => "TSOA",
		"TSC" => "TSOC",
		"TSP" => "TSOP",
		"TST" => "TSOT",
		"GP1" => "GRP1",
	]
);

#[cfg(test)]
mod tests {
	use super::upgrade_v2;

	#[test_log::test]
	fn upgrade_text_frames() {
		assert_eq!(upgrade_v2("TP1"), Some("TPE1"));
		assert_eq!(upgrade_v2("TP2"), Some("TPE2"));
		assert_eq!(upgrade_v2("TAL"), Some("TALB"));
		assert_eq!(upgrade_v2("TYE"), Some("TYER"));
		assert_eq!(upgrade_v2("TRK"), Some("TRCK"));
		assert_eq!(upgrade_v2("COM"), Some("COMM"));
	}

	#[test_log::test]
	fn unknown_key() {
		assert_eq!(upgrade_v2("ZZZ"), None);
		assert_eq!(upgrade_v2("TIT2"), None);
	}
}
