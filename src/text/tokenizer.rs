/*!
 * Word resolution at a character offset.
 *
 * Segmentation follows the Unicode word-boundary rules (UAX #29). Those rules
 * break between every ideograph and every hiragana character, so runs of the
 * same CJK script class are merged back into a single word candidate.
 */

use serde::{Deserialize, Serialize};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// A word-like unit of text with its character (Unicode scalar) offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Offset of the first character
    pub start: usize,
    /// Offset one past the last character
    pub end: usize,
}

impl Token {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CjkClass {
    Han,
    Hiragana,
}

fn cjk_class(c: char) -> Option<CjkClass> {
    match c as u32 {
        0x3005 | 0x3007 | 0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x2FA1F => {
            Some(CjkClass::Han)
        }
        0x3041..=0x309F => Some(CjkClass::Hiragana),
        _ => None,
    }
}

fn segment_class(segment: &str) -> Option<CjkClass> {
    let mut chars = segment.chars();
    let first = cjk_class(chars.next()?)?;
    chars.all(|c| cjk_class(c) == Some(first)).then_some(first)
}

/// A word segment as byte and character ranges into the source text
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    bytes: Range<usize>,
    chars: Range<usize>,
}

/// Word segments of `text`, with same-class CJK runs merged
fn segment_words(text: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut previous_class: Option<CjkClass> = None;
    let mut char_pos = 0;

    for (byte_idx, piece) in text.split_word_bound_indices() {
        let char_count = piece.chars().count();
        let class = segment_class(piece);

        match segments.last_mut() {
            Some(last) if class.is_some() && class == previous_class => {
                last.bytes.end = byte_idx + piece.len();
                last.chars.end = char_pos + char_count;
            }
            _ => segments.push(Segment {
                bytes: byte_idx..byte_idx + piece.len(),
                chars: char_pos..char_pos + char_count,
            }),
        }

        previous_class = class;
        char_pos += char_count;
    }

    segments
}

/// Resolve the word containing `char_offset`.
///
/// Returns `None` when the offset is out of bounds, the offset lands on
/// whitespace, or the token is a lone punctuation mark or symbol.
pub fn resolve_token(text: &str, char_offset: usize) -> Option<Token> {
    if char_offset >= text.chars().count() {
        return None;
    }

    let segment = segment_words(text)
        .into_iter()
        .find(|segment| segment.chars.contains(&char_offset))?;
    if segment.chars.is_empty() {
        return None;
    }

    let raw = &text[segment.bytes.clone()];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let is_word = trimmed.chars().any(char::is_alphanumeric) || trimmed.graphemes(true).count() > 1;
    if !is_word {
        return None;
    }

    let leading = raw.len() - raw.trim_start().len();
    let start = segment.chars.start + raw[..leading].chars().count();
    let end = start + trimmed.chars().count();

    Some(Token {
        text: trimmed.to_string(),
        start,
        end,
    })
}

/// All word tokens of `text`, in order, with punctuation and whitespace dropped
pub fn tokens(text: &str) -> Vec<Token> {
    segment_words(text)
        .into_iter()
        .filter_map(|segment| resolve_token(text, segment.chars.start))
        .collect()
}
