/*!
 * Reading direction (page-turn convention) for a language tag.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language_utils::{normalize_to_part1_or_part2t, primary_subtag, script_subtag};

/// Page-turn and navigation direction of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReadingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl ReadingDirection {
    pub fn is_right_to_left(&self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

impl fmt::Display for ReadingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftToRight => write!(f, "left-to-right"),
            Self::RightToLeft => write!(f, "right-to-left"),
        }
    }
}

/// Languages whose pages turn right-to-left regardless of their script.
///
/// Vertical and traditional layouts of these languages are read from the
/// right-hand page onward, so the page-turn gesture is reversed even though
/// the scripts themselves run left to right in horizontal text.
pub const PAGE_TURN_OVERRIDES: &[(&str, ReadingDirection)] = &[
    ("ja", ReadingDirection::RightToLeft),
    ("zh", ReadingDirection::RightToLeft),
    ("ko", ReadingDirection::RightToLeft),
];

/// Script subtags written right to left
const RTL_SCRIPTS: &[&str] = &["Arab", "Hebr", "Thaa", "Syrc", "Nkoo", "Adlm", "Rohg", "Mand", "Samr"];

/// Languages whose default script is written right to left
const RTL_LANGUAGES: &[&str] = &[
    "ar", "he", "fa", "ur", "yi", "ps", "sd", "ug", "dv", "ckb", "syr", "iw", "ji", "arc",
];

/// Resolve the reading direction of a language tag
pub fn resolve(language_code: &str) -> ReadingDirection {
    let primary = primary_subtag(language_code);

    if let Some((_, direction)) = PAGE_TURN_OVERRIDES.iter().find(|(code, _)| *code == primary) {
        return *direction;
    }

    script_direction(language_code, &primary)
}

/// Standard script direction of a tag, ignoring the page-turn overrides
pub fn script_direction(language_code: &str, primary: &str) -> ReadingDirection {
    if let Some(script) = script_subtag(language_code) {
        return if RTL_SCRIPTS.contains(&script.as_str()) {
            ReadingDirection::RightToLeft
        } else {
            ReadingDirection::LeftToRight
        };
    }

    // Three-letter codes are mapped to their two-letter form when one exists
    let canonical = normalize_to_part1_or_part2t(primary).unwrap_or_else(|_| primary.to_string());
    if RTL_LANGUAGES.contains(&canonical.as_str()) || RTL_LANGUAGES.contains(&primary) {
        ReadingDirection::RightToLeft
    } else {
        ReadingDirection::LeftToRight
    }
}
