/*!
 * Reading session state: the current page of a document and the single
 * highlighted word on it.
 *
 * Pages turn in the document's reading direction. For right-to-left
 * documents the on-screen left control advances and the right control goes
 * back.
 */

use log::debug;
use serde::Serialize;

use crate::document::Document;
use crate::text::direction::ReadingDirection;
use crate::text::tokenizer::{self, Token};
use crate::word_actions::WordSelection;

/// Logical page movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTurn {
    Previous,
    Next,
}

/// Physical navigation control, as laid out on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageControl {
    Left,
    Right,
}

/// The highlighted token of a page view, at most one at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    current: Option<Token>,
}

impl HighlightState {
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Replace the highlight, returning the one it cleared
    pub fn replace(&mut self, token: Token) -> Option<Token> {
        let previous = self.current.take();
        self.current = Some(token);
        previous
    }

    pub fn clear(&mut self) -> Option<Token> {
        self.current.take()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// Navigation and selection over the pages of one document
#[derive(Debug, Clone)]
pub struct ReadingSession {
    pages: Vec<String>,
    language_code: String,
    direction: ReadingDirection,
    current_page: usize,
    highlight: HighlightState,
}

impl ReadingSession {
    pub fn new(document: &Document) -> Self {
        Self {
            pages: document.pages().to_vec(),
            language_code: document.language_code().to_string(),
            direction: document.reading_direction(),
            current_page: 0,
            highlight: HighlightState::default(),
        }
    }

    pub fn direction(&self) -> ReadingDirection {
        self.direction
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_text(&self) -> &str {
        self.pages.get(self.current_page).map(String::as_str).unwrap_or_default()
    }

    /// "Page n of total", one-based
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page + 1, self.page_count())
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page + 1 < self.page_count()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    /// Advance one page, returns false on the last page
    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.set_page(self.current_page + 1);
        true
    }

    /// Go back one page, returns false on the first page
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.set_page(self.current_page - 1);
        true
    }

    /// Jump to a page, returns false when out of range
    pub fn go_to_page(&mut self, index: usize) -> bool {
        if index >= self.page_count() {
            return false;
        }
        self.set_page(index);
        true
    }

    fn set_page(&mut self, index: usize) {
        if index != self.current_page {
            // Offsets of the old page mean nothing on the new one
            self.highlight.clear();
        }
        self.current_page = index;
    }

    /// Page movement triggered by an on-screen control
    pub fn page_turn_for(&self, control: PageControl) -> PageTurn {
        match (self.direction, control) {
            (ReadingDirection::LeftToRight, PageControl::Left) => PageTurn::Previous,
            (ReadingDirection::LeftToRight, PageControl::Right) => PageTurn::Next,
            (ReadingDirection::RightToLeft, PageControl::Left) => PageTurn::Next,
            (ReadingDirection::RightToLeft, PageControl::Right) => PageTurn::Previous,
        }
    }

    /// Whether a control currently has a page to move to
    pub fn is_control_enabled(&self, control: PageControl) -> bool {
        match self.page_turn_for(control) {
            PageTurn::Previous => self.has_previous_page(),
            PageTurn::Next => self.has_next_page(),
        }
    }

    /// Apply an on-screen control, returns false when there is nowhere to go
    pub fn press(&mut self, control: PageControl) -> bool {
        match self.page_turn_for(control) {
            PageTurn::Previous => self.previous_page(),
            PageTurn::Next => self.next_page(),
        }
    }

    /// Resolve the word at `char_offset` of the current page and highlight it.
    /// A miss leaves the existing highlight in place.
    pub fn select(&mut self, char_offset: usize) -> Option<&Token> {
        let token = tokenizer::resolve_token(self.current_text(), char_offset)?;
        debug!(
            "Selected '{}' at {}..{} on page {}",
            token.text,
            token.start,
            token.end,
            self.current_page + 1
        );
        self.highlight.replace(token);
        self.highlight.current()
    }

    pub fn highlight(&self) -> Option<&Token> {
        self.highlight.current()
    }

    pub fn clear_selection(&mut self) {
        self.highlight.clear();
    }

    /// Word actions for the highlighted token
    pub fn selection(&self) -> Option<WordSelection> {
        self.highlight
            .current()
            .map(|token| WordSelection::from_token(token, &self.language_code))
    }
}
