/*!
 * Statistical language identification.
 *
 * Detection runs in two stages over a bounded prefix of the text:
 *
 * - a script census that counts letters per Unicode script; scripts used by a
 *   single language (Hangul, Greek, Thai, ...) decide directly,
 * - a common-word profile classifier that splits Latin and Cyrillic letter
 *   mass between the languages whose function words appear in the sample.
 *
 * Confidence values are normalised letter shares. Only their ordering and
 * determinism are meaningful.
 */

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::language_utils::UNDETERMINED;

/// Characters of the input inspected by default
pub const DEFAULT_SAMPLE_CHARS: usize = 8000;

/// Minimum confidence for a dominant language to be reported
pub const MIN_CONFIDENCE: f64 = 0.3;

/// Number of hypotheses callers ask for when they have no preference
pub const DEFAULT_MAX_HYPOTHESES: usize = 3;

/// A candidate language with its confidence in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageHypothesis {
    pub code: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Cyrillic,
    Greek,
    Arabic,
    Hebrew,
    Han,
    Kana,
    Hangul,
    Thai,
    Devanagari,
    Armenian,
    Georgian,
}

fn script_of(c: char) -> Option<Script> {
    let script = match c as u32 {
        0x0041..=0x005A | 0x0061..=0x007A | 0x00C0..=0x024F | 0x1E00..=0x1EFF => Script::Latin,
        0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
        0x0400..=0x052F => Script::Cyrillic,
        0x0530..=0x058F => Script::Armenian,
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF => {
            Script::Arabic
        }
        0x0900..=0x097F => Script::Devanagari,
        0x0E00..=0x0E7F => Script::Thai,
        0x10A0..=0x10FF => Script::Georgian,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
        0x3040..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9F => Script::Kana,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x2FA1F => Script::Han,
        _ => return None,
    };
    Some(script)
}

/// Function-word profiles for Latin-script languages, in tie-break order
const LATIN_PROFILES: &[(&str, &[&str])] = &[
    ("en", &[
        "the", "and", "of", "to", "is", "was", "that", "it", "with", "for", "this", "have",
        "from", "they", "you", "not", "are", "what", "which", "his", "her", "she", "he", "be",
        "been", "were", "would", "there", "their", "but", "had",
    ]),
    ("fr", &[
        "le", "la", "les", "et", "est", "une", "des", "du", "que", "qui", "dans", "pour", "pas",
        "sur", "avec", "ce", "il", "elle", "sont", "nous", "vous", "mais", "ou", "au", "aux",
        "était", "cette", "ses", "je", "de",
    ]),
    ("de", &[
        "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "ich", "sie", "mit", "auf",
        "den", "dem", "zu", "von", "sich", "auch", "es", "wir", "war", "wird", "noch", "nach",
        "aber", "wie", "oder", "des", "im",
    ]),
    ("es", &[
        "el", "los", "las", "y", "es", "una", "del", "que", "en", "por", "con", "para", "no",
        "se", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "fue", "este", "muy",
        "está", "ha", "de",
    ]),
    ("it", &[
        "il", "lo", "gli", "della", "che", "è", "di", "un", "una", "per", "non", "con", "sono",
        "del", "nel", "alla", "anche", "come", "più", "ma", "questo", "ha", "le", "dei", "delle",
        "si", "era", "essere",
    ]),
    ("pt", &[
        "o", "os", "as", "e", "é", "um", "uma", "do", "da", "dos", "das", "que", "não", "em",
        "com", "para", "por", "se", "mais", "ao", "na", "no", "foi", "ele", "ela", "mas", "isso",
        "seu", "sua", "de",
    ]),
    ("nl", &[
        "de", "het", "een", "en", "van", "is", "dat", "niet", "ik", "je", "zijn", "op", "te",
        "met", "voor", "die", "er", "maar", "aan", "ook", "als", "bij", "nog", "wel", "naar",
        "hij", "zij", "wordt",
    ]),
    ("ga", &[
        "an", "na", "agus", "ar", "is", "tá", "bhí", "sé", "sí", "ag", "le", "do", "go", "ní",
        "níl", "mé", "tú", "sin", "seo", "ach", "nuair", "leis", "air", "orm", "raibh", "dúirt",
        "féin", "aon", "mar", "bhfuil",
    ]),
    ("sv", &[
        "och", "att", "det", "som", "en", "är", "på", "av", "för", "med", "till", "den", "har",
        "inte", "om", "ett", "jag", "han", "hon", "var", "men", "de", "sig", "så", "vi", "kan",
        "från", "eller",
    ]),
];

/// Function-word profiles for Cyrillic-script languages, in tie-break order
const CYRILLIC_PROFILES: &[(&str, &[&str])] = &[
    ("ru", &[
        "и", "в", "не", "на", "что", "он", "я", "с", "как", "это", "по", "но", "она", "его", "к",
        "все", "так", "было", "из", "у", "же", "был", "бы", "то", "за", "мы", "от", "только",
        "сказал", "мне",
    ]),
    ("uk", &[
        "і", "в", "не", "на", "що", "він", "я", "з", "як", "це", "по", "але", "вона", "його",
        "до", "все", "так", "було", "у", "же", "був", "би", "та", "за", "ми", "від", "тільки",
        "сказав", "мені", "й",
    ]),
];

/// Word -> indices of the profiles listing it
struct ProfileIndex {
    codes: Vec<&'static str>,
    words: HashMap<&'static str, Vec<usize>>,
}

impl ProfileIndex {
    fn build(profiles: &[(&'static str, &'static [&'static str])]) -> Self {
        let mut words: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (idx, (_, list)) in profiles.iter().enumerate() {
            for word in list.iter() {
                words.entry(*word).or_default().push(idx);
            }
        }
        Self {
            codes: profiles.iter().map(|(code, _)| *code).collect(),
            words,
        }
    }

    /// Per-profile hit counts, in profile order
    fn score(&self, words: &[String]) -> Vec<usize> {
        let mut hits = vec![0usize; self.codes.len()];
        for word in words {
            if let Some(indices) = self.words.get(word.as_str()) {
                for &idx in indices {
                    hits[idx] += 1;
                }
            }
        }
        hits
    }
}

static LATIN_INDEX: Lazy<ProfileIndex> = Lazy::new(|| ProfileIndex::build(LATIN_PROFILES));
static CYRILLIC_INDEX: Lazy<ProfileIndex> = Lazy::new(|| ProfileIndex::build(CYRILLIC_PROFILES));

#[derive(Debug, Default)]
struct ScriptCensus {
    letters: usize,
    counts: Vec<(Script, usize)>,
}

impl ScriptCensus {
    fn take(sample: &str) -> Self {
        let mut census = Self::default();
        for c in sample.chars().filter(|c| c.is_alphabetic()) {
            census.letters += 1;
            if let Some(script) = script_of(c) {
                match census.counts.iter_mut().find(|(s, _)| *s == script) {
                    Some((_, count)) => *count += 1,
                    None => census.counts.push((script, 1)),
                }
            }
        }
        census
    }

    fn count(&self, script: Script) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == script)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// Language identification over a bounded text prefix
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    sample_chars: usize,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    /// Create a detector inspecting the first [`DEFAULT_SAMPLE_CHARS`] characters
    pub fn new() -> Self {
        Self {
            sample_chars: DEFAULT_SAMPLE_CHARS,
        }
    }

    /// Create a detector inspecting at most `sample_chars` characters
    pub fn with_sample_chars(sample_chars: usize) -> Self {
        Self { sample_chars }
    }

    pub fn sample_chars(&self) -> usize {
        self.sample_chars
    }

    fn sample<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.sample_chars) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        }
    }

    /// Dominant language code of `text`, or "und" when nothing is confident enough
    pub fn dominant_language(&self, text: &str) -> String {
        match self.hypotheses(text, 1).into_iter().next() {
            Some(top) if top.confidence >= MIN_CONFIDENCE => top.code,
            _ => UNDETERMINED.to_string(),
        }
    }

    /// Up to `max` language hypotheses, highest confidence first
    pub fn hypotheses(&self, text: &str, max: usize) -> Vec<LanguageHypothesis> {
        if max == 0 {
            return Vec::new();
        }

        let sample = self.sample(text);
        let census = ScriptCensus::take(sample);
        if census.letters == 0 {
            return Vec::new();
        }

        let mut scores: Vec<(&'static str, f64)> = Vec::new();
        let mut add = |code: &'static str, mass: f64| {
            if mass <= 0.0 {
                return;
            }
            match scores.iter_mut().find(|(c, _)| *c == code) {
                Some((_, score)) => *score += mass,
                None => scores.push((code, mass)),
            }
        };

        let han = census.count(Script::Han) as f64;
        let kana = census.count(Script::Kana) as f64;
        // Kana only appear in Japanese; Chinese text has none
        if kana > 0.0 && kana >= (han + kana) * 0.05 {
            add("ja", han + kana);
        } else {
            add("zh", han);
            add("ja", kana);
        }
        add("ko", census.count(Script::Hangul) as f64);
        add("ar", census.count(Script::Arabic) as f64);
        add("he", census.count(Script::Hebrew) as f64);
        add("el", census.count(Script::Greek) as f64);
        add("th", census.count(Script::Thai) as f64);
        add("hi", census.count(Script::Devanagari) as f64);
        add("hy", census.count(Script::Armenian) as f64);
        add("ka", census.count(Script::Georgian) as f64);

        let latin = census.count(Script::Latin);
        let cyrillic = census.count(Script::Cyrillic);
        if latin > 0 || cyrillic > 0 {
            let words: Vec<String> = sample.unicode_words().map(|w| w.to_lowercase()).collect();
            for (index, mass) in [(&*LATIN_INDEX, latin), (&*CYRILLIC_INDEX, cyrillic)] {
                if mass == 0 {
                    continue;
                }
                let hits = index.score(&words);
                let total: usize = hits.iter().sum();
                if total == 0 {
                    continue;
                }
                for (code, hit) in index.codes.iter().zip(hits) {
                    add(*code, mass as f64 * hit as f64 / total as f64);
                }
            }
        }

        let letters = census.letters as f64;
        let mut hypotheses: Vec<LanguageHypothesis> = scores
            .into_iter()
            .map(|(code, score)| LanguageHypothesis {
                code: code.to_string(),
                confidence: (score / letters).clamp(0.0, 1.0),
            })
            .collect();

        // Stable sort keeps table order on ties
        hypotheses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        hypotheses.truncate(max);

        debug!(
            "Language hypotheses over {} letters: {:?}",
            census.letters,
            hypotheses.iter().map(|h| (h.code.as_str(), h.confidence)).collect::<Vec<_>>()
        );
        hypotheses
    }
}

/// Dominant language using the default detector
pub fn dominant_language(text: &str) -> String {
    LanguageDetector::new().dominant_language(text)
}

/// Ranked hypotheses using the default detector
pub fn hypotheses(text: &str, max: usize) -> Vec<LanguageHypothesis> {
    LanguageDetector::new().hypotheses(text, max)
}
