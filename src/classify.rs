use crate::source_encoding::SourceEncoding;

/// Returns whether `c` is an ASCII character (below U+0080).
#[inline]
pub fn is_ascii_char(c: char) -> bool {
    (c as u32) < 0x80
}

/// Returns whether every character of `text` is ASCII.
pub fn is_ascii(text: &str) -> bool {
    text.is_ascii()
}

/// Returns whether every UTF-16 code unit of `units` is ASCII.
///
/// Surrogate pairs are not reassembled: each half is tested on its own,
/// which gives the same answer since both halves lie outside ASCII.
pub fn is_ascii_utf16(units: &[u16]) -> bool {
    units.iter().all(|&unit| unit < 0x80)
}

/// Decodes `bytes` from `encoding` and returns whether the text is ASCII.
///
/// Malformed input decodes to U+FFFD and is therefore never ASCII. A byte
/// order mark is consumed by decoding and does not count.
pub fn is_ascii_encoded(bytes: &[u8], encoding: SourceEncoding) -> bool {
    is_ascii(&encoding.decode_lossy(bytes))
}

#[cfg(test)]
mod tests {
    use super::{is_ascii, is_ascii_char, is_ascii_encoded, is_ascii_utf16};
    use crate::SourceEncoding;
    use encoding_rs::{UTF_16BE, UTF_16LE, WINDOWS_1252};

    #[test]
    fn test_is_ascii_char() {
        assert!(is_ascii_char('\0'));
        assert!(is_ascii_char('A'));
        assert!(is_ascii_char('\x7F'));
        assert!(!is_ascii_char('\u{80}'));
        assert!(!is_ascii_char('é'));
        assert!(!is_ascii_char('\u{1F600}'));
    }

    #[test]
    fn test_is_ascii_text() {
        assert!(is_ascii(""));
        assert!(is_ascii("Hello, world!\n"));
        assert!(!is_ascii("café"));
    }

    #[test]
    fn test_is_ascii_utf16() {
        assert!(is_ascii_utf16(&[]));
        assert!(is_ascii_utf16(&[0x48, 0x69]));
        assert!(!is_ascii_utf16(&[0x48, 0xE9]));
        // Lone and paired surrogates are both non-ASCII.
        assert!(!is_ascii_utf16(&[0xD83D]));
        assert!(!is_ascii_utf16(&[0xD83D, 0xDE00]));
    }

    #[test]
    fn test_is_ascii_encoded() {
        let utf8 = SourceEncoding::default();
        let le = SourceEncoding::new(UTF_16LE);
        let windows = SourceEncoding::new(WINDOWS_1252);
        assert!(is_ascii_encoded(b"plain", utf8));
        assert!(!is_ascii_encoded("né".as_bytes(), utf8));
        assert!(!is_ascii_encoded(b"\xFF", utf8));
        assert!(is_ascii_encoded(b"\xEF\xBB\xBFplain", utf8));
        assert!(is_ascii_encoded(b"a\0b\0", le));
        assert!(is_ascii_encoded(b"\0a\0b", SourceEncoding::new(UTF_16BE)));
        assert!(!is_ascii_encoded(b"\x00\xD8", le));
        assert!(!is_ascii_encoded(b"a\0b", le));
        assert!(is_ascii_encoded(b"abc", windows));
        assert!(!is_ascii_encoded(b"\xE9", windows));
        assert!(!is_ascii_encoded(b"\x80", windows));
    }
}
