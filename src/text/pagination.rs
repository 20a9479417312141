/*!
 * Line-aware pagination of long texts into bounded pages.
 *
 * All lengths are counted in extended grapheme clusters, so a page break
 * never lands inside a user-perceived character.
 */

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Page budget used when importing documents
pub const DEFAULT_TARGET_CHARS: usize = 2000;

/// Split `text` into pages of at most `target_chars` graphemes.
///
/// Lines are kept whole where they fit. A line that alone reaches the budget
/// is cut into fixed-size chunks that become pages of their own. A
/// non-positive budget yields the whole text as a single page, and the
/// result is never empty.
pub fn paginate(text: &str, target_chars: i64) -> Vec<String> {
    if target_chars <= 0 {
        return vec![text.to_string()];
    }
    let target = usize::try_from(target_chars).unwrap_or(usize::MAX);

    let mut pages: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for raw_line in split_lines(text) {
        // Each line keeps a newline terminator so paragraphs survive
        let line_len = raw_line.graphemes(true).count() + 1;

        if current_len + line_len > target && current_len > 0 {
            flush(&mut pages, &current);
            current.clear();
            current_len = 0;
        }

        if line_len >= target {
            // The terminator would only end up as a blank chunk of its own
            pages.extend(
                chunk_graphemes(raw_line, target)
                    .into_iter()
                    .filter(|chunk| !chunk.trim().is_empty()),
            );
        } else {
            current.push_str(raw_line);
            current.push('\n');
            current_len += line_len;
        }
    }

    if current_len > 0 {
        flush(&mut pages, &current);
    }

    if pages.is_empty() {
        debug!("Pagination produced no content pages, keeping the text as one page");
        return vec![text.to_string()];
    }

    pages
}

fn flush(pages: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        pages.push(trimmed.to_string());
    }
}

fn is_newline(grapheme: &str) -> bool {
    matches!(
        grapheme,
        "\n" | "\r" | "\r\n" | "\u{0B}" | "\u{0C}" | "\u{85}" | "\u{2028}" | "\u{2029}"
    )
}

/// Split on newline graphemes, keeping empty lines. "\r\n" is one break.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        if is_newline(grapheme) {
            lines.push(&text[start..idx]);
            start = idx + grapheme.len();
        }
    }
    lines.push(&text[start..]);
    lines
}

fn chunk_graphemes(line: &str, size: usize) -> Vec<String> {
    let graphemes: Vec<&str> = line.graphemes(true).collect();
    graphemes.chunks(size).map(|chunk| chunk.concat()).collect()
}

/// Pagination policy with a fixed page budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    target_chars: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_CHARS)
    }
}

impl Paginator {
    pub fn new(target_chars: usize) -> Self {
        Self { target_chars }
    }

    pub fn target_chars(&self) -> usize {
        self.target_chars
    }

    pub fn paginate(&self, text: &str) -> Vec<String> {
        paginate(text, i64::try_from(self.target_chars).unwrap_or(i64::MAX))
    }
}

/// Number of grapheme clusters in `text`
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}
