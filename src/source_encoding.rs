use encoding_rs::{DecoderResult, Encoding, UTF_8};
use std::{borrow::Cow, fmt, hash, ptr, str};
use tracing::debug;

/// Error returned when an encoding label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The label does not name an encoding that can decode text.
    #[error("unknown encoding label {0:?}")]
    UnknownLabel(String),
}

/// Error returned by strict decoding when the input is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input contains a byte sequence the encoding does not define.
    #[error("malformed {encoding} input at byte {offset}")]
    Malformed {
        /// Name of the encoding the input was decoded with.
        encoding: &'static str,
        /// Byte offset of the first malformed sequence.
        offset: usize,
    },
}

/// Character encoding that raw input bytes are declared in.
///
/// Decoding follows the WHATWG Encoding Standard as implemented by
/// `encoding_rs`. Labels such as `latin1` and `us-ascii` resolve to
/// windows-1252, and a UTF-8 or UTF-16 byte order mark at the start of the
/// input overrides the declared encoding.
#[derive(Copy, Clone)]
pub struct SourceEncoding {
    encoding: &'static Encoding,
}

impl SourceEncoding {
    /// Wraps an `encoding_rs` encoding.
    pub const fn new(encoding: &'static Encoding) -> Self {
        SourceEncoding { encoding }
    }

    /// Looks up an encoding by any of its WHATWG labels, ignoring case and
    /// surrounding whitespace.
    ///
    /// Labels of the `replacement` encoding are rejected, since it decodes
    /// every input to a single U+FFFD.
    pub fn from_label(label: &str) -> Option<Self> {
        Encoding::for_label_no_replacement(label.as_bytes()).map(SourceEncoding::new)
    }

    /// Returns the underlying `encoding_rs` encoding.
    pub fn encoding(self) -> &'static Encoding {
        self.encoding
    }

    /// Returns the canonical name of this encoding.
    pub fn name(self) -> &'static str {
        self.encoding.name()
    }

    /// Decodes `bytes`, failing on the first malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
        let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((self.encoding, 0));
        let body = &bytes[bom_len..];
        encoding
            .decode_without_bom_handling_and_without_replacement(body)
            .ok_or_else(|| DecodeError::Malformed {
                encoding: encoding.name(),
                offset: bom_len + malformed_offset(encoding, body),
            })
    }

    /// Decodes `bytes`, replacing each malformed sequence with U+FFFD.
    pub fn decode_lossy(self, bytes: &[u8]) -> Cow<'_, str> {
        let (text, used, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            debug!(encoding = used.name(), len = bytes.len(), "malformed input replaced");
        }
        text
    }
}

/// Finds where `encoding` first rejects `bytes`.
fn malformed_offset(encoding: &'static Encoding, bytes: &[u8]) -> usize {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut scratch = [0u8; 1024];
    let mut read_total = 0;
    loop {
        let (result, read, _) =
            decoder.decode_to_utf8_without_replacement(&bytes[read_total..], &mut scratch, true);
        read_total += read;
        match result {
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(bad, extra) => {
                return read_total.saturating_sub(usize::from(bad) + usize::from(extra))
            }
            DecoderResult::InputEmpty => return bytes.len(),
        }
    }
}

impl Default for SourceEncoding {
    fn default() -> Self {
        SourceEncoding::new(UTF_8)
    }
}

impl From<&'static Encoding> for SourceEncoding {
    fn from(encoding: &'static Encoding) -> Self {
        SourceEncoding::new(encoding)
    }
}

impl PartialEq for SourceEncoding {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.encoding, other.encoding)
    }
}

impl Eq for SourceEncoding {}

impl hash::Hash for SourceEncoding {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        ptr::hash(self.encoding, state)
    }
}

impl fmt::Debug for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SourceEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for SourceEncoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceEncoding::from_label(s).ok_or_else(|| EncodingError::UnknownLabel(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, EncodingError, SourceEncoding};
    use encoding_rs::{KOI8_R, SHIFT_JIS, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
    use std::borrow::Cow;

    #[test]
    fn test_from_label() {
        let label = |l: &str| SourceEncoding::from_label(l).map(SourceEncoding::encoding);
        assert_eq!(Some(UTF_8), label("UTF-8"));
        assert_eq!(Some(UTF_8), label("utf8"));
        assert_eq!(Some(UTF_16BE), label(" utf-16be "));
        assert_eq!(Some(UTF_16LE), label("utf-16"));
        assert_eq!(Some(WINDOWS_1252), label("ISO-8859-1"));
        assert_eq!(Some(WINDOWS_1252), label("us-ascii"));
        assert_eq!(Some(KOI8_R), label("koi8-r"));
        assert_eq!(None, label("ebcdic"));
        assert_eq!(None, label("replacement"));
        assert_eq!(
            Err(EncodingError::UnknownLabel("ebcdic".to_owned())),
            "ebcdic".parse::<SourceEncoding>()
        );
        for encoding in [UTF_8, UTF_16LE, UTF_16BE, WINDOWS_1252, KOI8_R, SHIFT_JIS] {
            let encoding = SourceEncoding::new(encoding);
            assert_eq!(Ok(encoding), encoding.to_string().parse::<SourceEncoding>());
        }
        assert_eq!(SourceEncoding::new(UTF_8), SourceEncoding::default());
        assert_eq!(
            "SourceEncoding(\"windows-1252\")",
            format!("{:?}", SourceEncoding::from(WINDOWS_1252))
        );
    }

    #[test]
    fn test_decode_borrows_ascii() {
        let utf8 = SourceEncoding::default();
        assert!(matches!(utf8.decode(b"abc"), Ok(Cow::Borrowed("abc"))));
        assert!(matches!(utf8.decode_lossy(b"abc"), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_decode_utf8() {
        let utf8 = SourceEncoding::default();
        assert_eq!("déjà", utf8.decode("déjà".as_bytes()).unwrap());
        assert_eq!(
            Err(DecodeError::Malformed {
                encoding: "UTF-8",
                offset: 2
            }),
            utf8.decode(b"ab\xFFcd")
        );
        assert_eq!("ab\u{FFFD}cd", utf8.decode_lossy(b"ab\xFFcd"));
    }

    #[test]
    fn test_decode_utf16() {
        let le = SourceEncoding::new(UTF_16LE);
        assert_eq!(
            "Aé\u{1F600}",
            le.decode(&[0x41, 0x00, 0xE9, 0x00, 0x3D, 0xD8, 0x00, 0xDE]).unwrap()
        );
        let be = SourceEncoding::new(UTF_16BE);
        assert_eq!("Aé", be.decode(&[0x00, 0x41, 0x00, 0xE9]).unwrap());

        let unpaired = [0x41, 0x00, 0x3D, 0xD8, 0x42, 0x00];
        assert!(matches!(
            le.decode(&unpaired),
            Err(DecodeError::Malformed {
                encoding: "UTF-16LE",
                ..
            })
        ));
        assert_eq!("A\u{FFFD}B", le.decode_lossy(&unpaired));
        assert_eq!("A\u{FFFD}", le.decode_lossy(&[0x41, 0x00, 0x42]));
    }

    #[test]
    fn test_byte_order_mark_overrides_label() {
        let declared = SourceEncoding::from_label("utf-16").unwrap();
        let be_with_bom = [0xFE, 0xFF, 0x00, 0x41, 0x00, 0xE9];
        assert_eq!("Aé", declared.decode_lossy(&be_with_bom));
        assert_eq!("Aé", declared.decode(&be_with_bom).unwrap());

        let utf8_with_bom = b"\xEF\xBB\xBFcaf\xC3\xA9";
        let windows = SourceEncoding::new(WINDOWS_1252);
        assert_eq!("café", windows.decode_lossy(utf8_with_bom));
        assert_eq!("café", windows.decode(utf8_with_bom).unwrap());
        assert_eq!(
            Err(DecodeError::Malformed {
                encoding: "UTF-8",
                offset: 4
            }),
            windows.decode(b"\xEF\xBB\xBFa\xFF")
        );
    }

    #[test]
    fn test_decode_single_byte() {
        let windows = SourceEncoding::new(WINDOWS_1252);
        assert_eq!("café", windows.decode(b"caf\xE9").unwrap());
        assert_eq!(
            "\u{20AC}5 \u{201C}ok\u{201D}",
            windows.decode(b"\x805 \x93ok\x94").unwrap()
        );
        assert_eq!("\u{0081}", windows.decode(b"\x81").unwrap());
        let koi8 = SourceEncoding::new(KOI8_R);
        assert_eq!("Мир", koi8.decode(b"\xED\xC9\xD2").unwrap());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            "malformed UTF-8 input at byte 2",
            DecodeError::Malformed {
                encoding: "UTF-8",
                offset: 2
            }
            .to_string()
        );
        assert_eq!(
            "unknown encoding label \"ebcdic\"",
            EncodingError::UnknownLabel("ebcdic".to_owned()).to_string()
        );
    }
}
