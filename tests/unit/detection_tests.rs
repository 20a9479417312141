/*!
 * Tests for language detection and reading direction resolution
 */

use lexireader::text::detection::{self, LanguageDetector};
use lexireader::text::direction::{self, PAGE_TURN_OVERRIDES, ReadingDirection};
use crate::common;

#[test]
fn test_dominantLanguage_withCyrillic_shouldPickRussian() {
    let text = "Он сказал мне, что все было не так, как я думал, и она это знала.";
    assert_eq!(detection::dominant_language(text), "ru");
}

#[test]
fn test_dominantLanguage_withGreek_shouldPickGreek() {
    assert_eq!(detection::dominant_language("Καλημέρα κόσμε, τι κάνεις σήμερα;"), "el");
}

#[test]
fn test_dominantLanguage_withSamples() {
    assert_eq!(detection::dominant_language(common::JAPANESE_SAMPLE), "ja");
    assert_eq!(detection::dominant_language(common::FRENCH_SAMPLE), "fr");
    assert_eq!(detection::dominant_language(&common::english_prose(500)), "en");
}

#[test]
fn test_hypotheses_withMixedScripts_shouldRankLargerShareFirst() {
    let text = format!("{} {}", common::JAPANESE_SAMPLE, "the cat");
    let result = detection::hypotheses(&text, 3);
    assert_eq!(result[0].code, "ja");
    assert!(result.len() >= 2);
    assert!(result.iter().any(|h| h.code == "en"));
}

#[test]
fn test_detector_withCustomSample_shouldReportIt() {
    let detector = LanguageDetector::with_sample_chars(10);
    assert_eq!(detector.sample_chars(), 10);
    assert_eq!(LanguageDetector::default().sample_chars(), detection::DEFAULT_SAMPLE_CHARS);
}

#[test]
fn test_resolve_withOverrideTable_shouldMatchTable() {
    for (code, expected) in PAGE_TURN_OVERRIDES {
        assert_eq!(direction::resolve(code), *expected);
    }
    assert_eq!(PAGE_TURN_OVERRIDES.len(), 3);
}

#[test]
fn test_resolve_standardDirections() {
    assert_eq!(direction::resolve("ar"), ReadingDirection::RightToLeft);
    assert_eq!(direction::resolve("he"), ReadingDirection::RightToLeft);
    for code in ["en", "fr", "de"] {
        assert_eq!(direction::resolve(code), ReadingDirection::LeftToRight);
    }
    assert_eq!(ReadingDirection::default(), ReadingDirection::LeftToRight);
    assert!(ReadingDirection::RightToLeft.is_right_to_left());
}
