use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Language tag utilities
///
/// Helpers for the BCP-47 tags stored on documents: splitting out the
/// primary language and script subtags, validating and normalising tags,
/// and mapping ISO 639-2/3 codes back to their 2-letter form.

/// Sentinel tag for an undetermined language
pub const UNDETERMINED: &str = "und";

static LANGUAGE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{1,8})*$").expect("valid language tag pattern")
});

/// ISO 639-2/B codes that differ from their 639-2/T counterpart
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
    ("tib", "bod"),
];

/// Lowercased primary language subtag of a tag ("pt-BR" -> "pt")
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Script subtag of a tag in title case, if present ("zh-Hant-TW" -> "Hant")
pub fn script_subtag(tag: &str) -> Option<String> {
    tag.trim()
        .split(['-', '_'])
        .skip(1)
        .find(|part| part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|part| {
            let mut chars = part.chars();
            let first = chars.next().map(|c| c.to_ascii_uppercase());
            first
                .into_iter()
                .chain(chars.map(|c| c.to_ascii_lowercase()))
                .collect()
        })
}

fn known_primary(primary: &str) -> bool {
    match primary.len() {
        2 => Language::from_639_1(primary).is_some(),
        3 => {
            primary == UNDETERMINED
                || Language::from_639_3(primary).is_some()
                || PART2B_TO_PART2T.iter().any(|(b, _)| *b == primary)
        }
        _ => false,
    }
}

/// Check that a tag is well formed and its primary language is known
pub fn is_valid_language_tag(tag: &str) -> bool {
    let tag = tag.trim();
    LANGUAGE_TAG_REGEX.is_match(tag) && known_primary(&primary_subtag(tag))
}

/// Normalise a tag to `xx[-Rest]` form, falling back to "und" when invalid
pub fn normalize_language_tag(tag: &str) -> String {
    let tag = tag.trim();
    if !is_valid_language_tag(tag) {
        return UNDETERMINED.to_string();
    }

    let mut parts = tag.split(['-', '_']);
    let primary = parts.next().unwrap_or_default().to_lowercase();
    let mut normalized = primary;
    for part in parts {
        normalized.push('-');
        normalized.push_str(part);
    }
    normalized
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
/// Falls back to ISO 639-2/T if no ISO 639-1 code exists
pub fn normalize_to_part1_or_part2t(code: &str) -> Result<String> {
    let normalized_code = primary_subtag(code);

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
    } else if normalized_code.len() == 3 {
        let part2t = PART2B_TO_PART2T
            .iter()
            .find(|(b, _)| *b == normalized_code)
            .map(|(_, t)| *t)
            .unwrap_or(normalized_code.as_str());

        if let Some(lang) = Language::from_639_3(part2t) {
            if let Some(code_639_1) = lang.to_639_1() {
                return Ok(code_639_1.to_string());
            }
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the English language name for a tag
pub fn get_language_name(code: &str) -> Result<String> {
    if primary_subtag(code) == UNDETERMINED {
        return Ok("Undetermined".to_string());
    }

    let normalized = normalize_to_part1_or_part2t(code)?;
    let lang = if normalized.len() == 2 {
        Language::from_639_1(&normalized)
    } else {
        Language::from_639_3(&normalized)
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
