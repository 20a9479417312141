use serde::Serialize;
use url::Url;

use crate::errors::LookupError;
use crate::language_utils::{UNDETERMINED, primary_subtag};
use crate::lookup;
use crate::text::tokenizer::Token;

// @module: Hand-off requests built from a selected word

/// Text-to-speech request for an external synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechRequest {
    pub text: String,
    /// Voice language, absent when the document language is unknown
    pub voice_language: Option<String>,
}

/// On-device dictionary request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryRequest {
    pub term: String,
}

/// A word the reader selected, together with its document language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSelection {
    pub word: String,
    pub language_code: String,
}

impl WordSelection {
    pub fn new(word: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            language_code: language_code.into(),
        }
    }

    pub fn from_token(token: &Token, language_code: &str) -> Self {
        Self::new(token.text.clone(), language_code)
    }

    /// Web lookup link for the word
    pub fn lookup_url(&self) -> Result<Url, LookupError> {
        lookup::route(&self.word, Some(&self.language_code))
    }

    pub fn speech_request(&self) -> SpeechRequest {
        let code = self.language_code.trim();
        let voice_language = if code.is_empty() || primary_subtag(code) == UNDETERMINED {
            None
        } else {
            Some(code.to_string())
        };

        SpeechRequest {
            text: self.word.clone(),
            voice_language,
        }
    }

    pub fn dictionary_request(&self) -> DictionaryRequest {
        DictionaryRequest {
            term: self.word.clone(),
        }
    }

    /// Text placed on the clipboard by the copy action
    pub fn clipboard_text(&self) -> &str {
        &self.word
    }
}
