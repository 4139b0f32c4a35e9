//! Single-pass chart format (`.tja`).
//!
//! Metadata is a flat `NAME:value` header that ends at the `#START` line.
//! `DEMOSTART` gives the preview point in seconds.

use super::PreviewOffset;

const DEMOSTART_KEY: &str = "demostart";
const START_COMMAND: &str = "#start";

pub fn preview_offset(text: &str) -> PreviewOffset {
    for line in text.lines() {
        let line = line.trim();

        match line.split_once(':') {
            Some((name, value)) => {
                if !name.trim().eq_ignore_ascii_case(DEMOSTART_KEY) {
                    continue;
                }
                // Unparsable values are skipped; a later DEMOSTART may still apply
                if let Some(seconds) = parse_seconds(value) {
                    return PreviewOffset::from_secs_f64(seconds);
                }
            }
            None if line.eq_ignore_ascii_case(START_COMMAND) => break,
            None => {}
        }
    }

    PreviewOffset::ZERO
}

fn parse_seconds(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|s| s.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_of(text: &str) -> u64 {
        preview_offset(text).as_millis()
    }

    #[test]
    fn test_demostart() {
        assert_eq!(offset_of("TITLE:Song\nDEMOSTART:1.5\n#START\n1,\n#END"), 1500);
    }

    #[test]
    fn test_demostart_case_and_whitespace() {
        assert_eq!(offset_of("  demoStart : 12.25 "), 12250);
    }

    #[test]
    fn test_demostart_rounds() {
        assert_eq!(offset_of("DEMOSTART:0.0006"), 1);
        assert_eq!(offset_of("DEMOSTART:40.1234"), 40123);
    }

    #[test]
    fn test_demostart_after_start() {
        assert_eq!(offset_of("TITLE:Song\n#START\nDEMOSTART:1.5\n#END"), 0);
        assert_eq!(offset_of("#start\nDEMOSTART:1.5"), 0);
    }

    #[test]
    fn test_demostart_not_a_number() {
        assert_eq!(offset_of("DEMOSTART:notanumber\nDEMOSTART:2"), 2000);
        assert_eq!(offset_of("DEMOSTART:notanumber\n#START\nDEMOSTART:2"), 0);
        assert_eq!(offset_of("DEMOSTART:\nDEMOSTART:inf\nDEMOSTART:NaN"), 0);
    }

    #[test]
    fn test_demostart_negative() {
        assert_eq!(offset_of("DEMOSTART:-3"), 0);
    }

    #[test]
    fn test_first_demostart_wins() {
        assert_eq!(offset_of("DEMOSTART:3\nDEMOSTART:4"), 3000);
    }

    #[test]
    fn test_start_with_player_side_is_not_terminator() {
        // Only a bare #START ends the header
        assert_eq!(offset_of("#START P1\nDEMOSTART:2"), 2000);
    }

    #[test]
    fn test_no_demostart() {
        assert_eq!(offset_of("TITLE:Song\nBPM:120"), 0);
        assert_eq!(offset_of(""), 0);
    }
}
