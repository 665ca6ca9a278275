//! Bytes <-> text boundary for file contents.
//!
//! Decoding is deliberately strict: BOM-sniffed UTF-8/UTF-16, or BOM-less
//! strict UTF-8. Anything that fails to decode is treated as binary and the
//! caller copies the bytes verbatim. Encoding is the exact inverse of
//! decoding (same encoding, same BOM), so a no-op substitution round-trips
//! byte-identically. The line-ending convention is detected and recorded but
//! never changed.

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Source text encoding, as sniffed from the BOM (or its absence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8 { bom: bool },
    Utf16Le,
    Utf16Be,
}

/// Dominant line-ending style of a text; informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    Cr,
}

pub fn detect_line_ending(text: &str) -> LineEnding {
    if text.contains("\r\n") {
        LineEnding::Crlf
    } else if text.contains('\r') {
        LineEnding::Cr
    } else {
        LineEnding::Lf
    }
}

/// A decoded file body plus everything needed to re-encode it unchanged.
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
    pub line_ending: LineEnding,
}

/// Decode raw bytes to text, or None when the content is not cleanly
/// decodable (the file is then handled as binary).
pub fn decode(bytes: &[u8]) -> Option<DecodedText> {
    let (encoding, body): (TextEncoding, &[u8]) = match Encoding::for_bom(bytes) {
        Some((enc, bom_len)) if enc == UTF_8 => (TextEncoding::Utf8 { bom: true }, &bytes[bom_len..]),
        Some((enc, bom_len)) if enc == UTF_16LE => (TextEncoding::Utf16Le, &bytes[bom_len..]),
        Some((enc, bom_len)) if enc == UTF_16BE => (TextEncoding::Utf16Be, &bytes[bom_len..]),
        _ => (TextEncoding::Utf8 { bom: false }, bytes),
    };

    let decoder = match encoding {
        TextEncoding::Utf8 { .. } => UTF_8,
        TextEncoding::Utf16Le => UTF_16LE,
        TextEncoding::Utf16Be => UTF_16BE,
    };
    // Without-replacement decode: any malformed sequence marks the content
    // binary instead of silently corrupting it with U+FFFD.
    let text = decoder
        .decode_without_bom_handling_and_without_replacement(body)?
        .into_owned();
    let line_ending = detect_line_ending(&text);

    Some(DecodedText {
        text,
        encoding,
        line_ending,
    })
}

/// Re-encode text with the same encoding and BOM it was decoded with.
pub fn encode(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 { bom } => {
            let mut out = Vec::with_capacity(text.len() + 3);
            if bom {
                out.extend_from_slice(UTF8_BOM);
            }
            out.extend_from_slice(text.as_bytes());
            out
        }
        TextEncoding::Utf16Le => {
            let mut out = Vec::with_capacity(text.len() * 2 + 2);
            out.extend_from_slice(UTF16LE_BOM);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
            out
        }
        TextEncoding::Utf16Be => {
            let mut out = Vec::with_capacity(text.len() * 2 + 2);
            out.extend_from_slice(UTF16BE_BOM);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_be_bytes());
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8_round_trips_byte_identical() {
        let bytes = "hello\nworld\n".as_bytes();
        let d = decode(bytes).unwrap();
        assert_eq!(d.encoding, TextEncoding::Utf8 { bom: false });
        assert_eq!(d.line_ending, LineEnding::Lf);
        assert_eq!(encode(&d.text, d.encoding), bytes);
    }

    #[test]
    fn crlf_preserved() {
        let bytes = b"line one\r\nline two\r\n";
        let d = decode(bytes).unwrap();
        assert_eq!(d.line_ending, LineEnding::Crlf);
        assert_eq!(encode(&d.text, d.encoding), bytes.to_vec());
    }

    #[test]
    fn utf8_bom_preserved() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("bom text".as_bytes());
        let d = decode(&bytes).unwrap();
        assert_eq!(d.encoding, TextEncoding::Utf8 { bom: true });
        assert_eq!(d.text, "bom text");
        assert_eq!(encode(&d.text, d.encoding), bytes);
    }

    #[test]
    fn utf16le_round_trips() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "abc\r\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let d = decode(&bytes).unwrap();
        assert_eq!(d.encoding, TextEncoding::Utf16Le);
        assert_eq!(d.text, "abc\r\n");
        assert_eq!(d.line_ending, LineEnding::Crlf);
        assert_eq!(encode(&d.text, d.encoding), bytes);
    }

    #[test]
    fn utf16be_round_trips() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "xy".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        let d = decode(&bytes).unwrap();
        assert_eq!(d.encoding, TextEncoding::Utf16Be);
        assert_eq!(encode(&d.text, d.encoding), bytes);
    }

    #[test]
    fn invalid_utf8_is_binary() {
        assert!(decode(&[0x00, 0xFF, 0xFE, 0x00, 0x80]).is_none());
        assert!(decode(&[b'a', 0xC0, b'b']).is_none());
    }

    #[test]
    fn cr_only_detected() {
        let d = decode(b"old mac\rstyle\r").unwrap();
        assert_eq!(d.line_ending, LineEnding::Cr);
    }
}
