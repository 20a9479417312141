use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language_utils::{self, UNDETERMINED};
use crate::text::direction::{self, ReadingDirection};

// @module: Imported document model

/// A paginated plain-text document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DocumentRecord")]
pub struct Document {
    // @field: Stable identifier
    id: Uuid,

    // @field: Display title, the file name without extension
    title: String,

    // @field: Import timestamp
    created_at: DateTime<Utc>,

    // @field: BCP-47 tag or "und"
    language_code: String,

    // @field: Page texts, never empty
    pages: Vec<String>,
}

/// Stored form of a [`Document`], checked again when loaded
#[derive(Deserialize)]
struct DocumentRecord {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    language_code: String,
    pages: Vec<String>,
}

impl From<DocumentRecord> for Document {
    fn from(record: DocumentRecord) -> Self {
        let mut document = Document::new(record.title, &record.language_code, record.pages);
        document.id = record.id;
        document.created_at = record.created_at;
        document
    }
}

impl Document {
    // @creates: Document with a fresh id and timestamp
    // @params: title, language tag (normalised, "und" when invalid), pages
    pub fn new(title: impl Into<String>, language_code: &str, pages: Vec<String>) -> Self {
        let pages = if pages.is_empty() { vec![String::new()] } else { pages };
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            created_at: Utc::now(),
            language_code: language_utils::normalize_language_tag(language_code),
            pages,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page-turn direction, derived from the language tag on every call
    pub fn reading_direction(&self) -> ReadingDirection {
        direction::resolve(&self.language_code)
    }

    /// English name of the document language
    pub fn language_name(&self) -> String {
        language_utils::get_language_name(&self.language_code)
            .unwrap_or_else(|_| "Undetermined".to_string())
    }

    pub fn is_language_determined(&self) -> bool {
        self.language_code != UNDETERMINED
    }
}
