/*!
 * Byte-to-text decoding with an ordered encoding fallback list.
 *
 * Candidates are tried from the most specific to the most permissive. Every
 * candidate decodes strictly (a replacement character means failure), so a
 * lossy single-byte codec can never shadow the encoding the file is really in.
 */

use encoding_rs::{EUC_JP, Encoding, ISO_2022_JP, MACINTOSH, SHIFT_JIS, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};
use log::debug;
use serde::Serialize;
use std::fmt;

use crate::errors::DecodeError;

/// Text encodings in the order they are attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    Utf8,
    /// UTF-16 introduced by a byte order mark
    Utf16,
    Utf16Le,
    Utf16Be,
    Utf32,
    ShiftJis,
    Iso2022Jp,
    EucJp,
    Windows1252,
    Latin1,
    /// Permissive single-byte fallback, accepts any input
    MacRoman,
}

impl TextEncoding {
    /// Fallback order used by [`decode`]
    pub const FALLBACK_ORDER: [TextEncoding; 11] = [
        TextEncoding::Utf8,
        TextEncoding::Utf16,
        TextEncoding::Utf16Le,
        TextEncoding::Utf16Be,
        TextEncoding::Utf32,
        TextEncoding::ShiftJis,
        TextEncoding::Iso2022Jp,
        TextEncoding::EucJp,
        TextEncoding::Windows1252,
        TextEncoding::Latin1,
        TextEncoding::MacRoman,
    ];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf32 => "UTF-32",
            Self::ShiftJis => "Shift_JIS",
            Self::Iso2022Jp => "ISO-2022-JP",
            Self::EucJp => "EUC-JP",
            Self::Windows1252 => "windows-1252",
            Self::Latin1 => "ISO-8859-1",
            Self::MacRoman => "macintosh",
        }
    }

    /// Strictly decode `bytes`, returning `None` when they are not valid in this encoding
    pub fn try_decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => {
                let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                strict(UTF_8, body)
            }
            Self::Utf16 => match bytes {
                // UTF-32LE byte order mark
                [0xFF, 0xFE, 0x00, 0x00, ..] => None,
                [0xFF, 0xFE, rest @ ..] => strict(UTF_16LE, rest),
                [0xFE, 0xFF, rest @ ..] => strict(UTF_16BE, rest),
                _ => None,
            },
            Self::Utf16Le => strict(UTF_16LE, bytes).filter(|s| is_plausible_text(s)),
            Self::Utf16Be => strict(UTF_16BE, bytes).filter(|s| is_plausible_text(s)),
            Self::Utf32 => decode_utf32(bytes),
            Self::ShiftJis => strict(SHIFT_JIS, bytes),
            Self::Iso2022Jp => strict(ISO_2022_JP, bytes),
            Self::EucJp => strict(EUC_JP, bytes),
            Self::Windows1252 => {
                // Bytes left undefined by the code page
                if bytes.iter().any(|&b| matches!(b, 0x81 | 0x8D | 0x8F | 0x90 | 0x9D)) {
                    None
                } else {
                    strict(WINDOWS_1252, bytes)
                }
            }
            Self::Latin1 => {
                if bytes.iter().any(|b| (0x80..=0x9F).contains(b)) {
                    None
                } else {
                    Some(bytes.iter().map(|&b| char::from(b)).collect())
                }
            }
            Self::MacRoman => Some(MACINTOSH.decode_without_bom_handling(bytes).0.into_owned()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text produced by [`decode`] together with the encoding that won
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Decode raw bytes with the first encoding of [`TextEncoding::FALLBACK_ORDER`] that accepts them
pub fn decode(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    decode_with(bytes, &TextEncoding::FALLBACK_ORDER)
}

/// Decode raw bytes trying `candidates` in order
pub fn decode_with(bytes: &[u8], candidates: &[TextEncoding]) -> Result<DecodedText, DecodeError> {
    for encoding in candidates {
        if let Some(text) = encoding.try_decode(bytes) {
            debug!("Decoded {} bytes as {}", bytes.len(), encoding);
            return Ok(DecodedText { text, encoding: *encoding });
        }
    }

    Err(DecodeError::Exhausted { byte_len: bytes.len() })
}

fn strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

fn decode_utf32(bytes: &[u8]) -> Option<String> {
    let (body, little_endian, has_bom) = match bytes {
        [0xFF, 0xFE, 0x00, 0x00, rest @ ..] => (rest, true, true),
        [0x00, 0x00, 0xFE, 0xFF, rest @ ..] => (rest, false, true),
        _ => (bytes, true, false),
    };
    if body.len() % 4 != 0 {
        return None;
    }

    let text = body
        .chunks_exact(4)
        .map(|unit| {
            let unit = [unit[0], unit[1], unit[2], unit[3]];
            let value = if little_endian {
                u32::from_le_bytes(unit)
            } else {
                u32::from_be_bytes(unit)
            };
            char::from_u32(value)
        })
        .collect::<Option<String>>()?;

    if has_bom || is_plausible_text(&text) {
        Some(text)
    } else {
        None
    }
}

/// BOM-less wide encodings accept almost any even-length buffer, so their
/// output must look like text and show at least one Latin-1 range character.
/// Legacy byte encodings never contain the zero bytes such characters need.
fn is_plausible_text(text: &str) -> bool {
    let clean = text.chars().all(|c| {
        !matches!(c, '\u{FFFE}' | '\u{FFFF}' | '\u{E000}'..='\u{F8FF}')
            && (!c.is_control() || matches!(c, '\t' | '\n' | '\r' | '\u{0C}'))
    });
    clean && text.chars().any(|c| c <= '\u{FF}')
}
