use encoding_rs::SHIFT_JIS;
use tracing::debug;

/// Decodes chart file bytes to text.
///
/// Charts are Shift-JIS by convention. Undecodable sequences become U+FFFD
/// instead of failing, and a UTF-8 or UTF-16 BOM switches the decoder to that
/// encoding. NUL characters are removed from the result so that padded or
/// half-written files still split into clean lines.
pub fn decode_chart(bytes: &[u8]) -> String {
    let (decoded, encoding, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        debug!(
            "{} decoding had errors for bytes: {:?}",
            encoding.name(),
            &bytes[..bytes.len().min(20)]
        );
    }
    decoded.replace('\0', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_shift_jis() {
        let (encoded, _, _) = SHIFT_JIS.encode("TITLE:さいたま2000");
        assert_eq!(decode_chart(&encoded), "TITLE:さいたま2000");
    }

    #[test]
    fn test_decode_strips_nul() {
        assert_eq!(decode_chart(b"DEMO\0START:1\0\0\n"), "DEMOSTART:1\n");
    }

    #[test]
    fn test_decode_replaces_invalid_bytes() {
        // 0x81 starts a double-byte sequence that 0x20 cannot complete
        let decoded = decode_chart(b"A\x81 B");
        assert!(decoded.starts_with('A'));
        assert!(decoded.contains('\u{FFFD}'));
        assert!(decoded.ends_with('B'));
    }

    #[test]
    fn test_decode_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("TITLE:太鼓".as_bytes());
        assert_eq!(decode_chart(&bytes), "TITLE:太鼓");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_chart(b""), "");
    }
}
