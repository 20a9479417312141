/*!
 * Routing of a selected word to a dictionary or web lookup URL.
 *
 * A small closed table maps recognised languages to lookup services. Any
 * other language falls back to a generic web search for the word's
 * definition. Words are escaped by the `url` crate, as a path segment or as
 * a form-encoded query value depending on the template.
 */

use log::{debug, warn};
use serde::Serialize;
use std::fmt;
use url::Url;

use crate::errors::LookupError;
use crate::language_utils::{UNDETERMINED, normalize_to_part1_or_part2t, primary_subtag};

/// How a template embeds the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTemplate {
    /// Word appended as the last path segment of `base`
    Path { base: &'static str },
    /// Word passed as the `param` query value, followed by `suffix` when set
    Query {
        base: &'static str,
        param: &'static str,
        suffix: Option<&'static str>,
    },
}

impl LookupTemplate {
    /// Build the URL for `word`
    pub fn build(&self, word: &str) -> Result<Url, LookupError> {
        let unroutable = |reason: String| LookupError::Unroutable {
            word: word.to_string(),
            reason,
        };

        match self {
            Self::Path { base } => {
                // Dot segments are dropped when pushed, losing the word
                if matches!(word, "." | "..") {
                    return Err(unroutable(format!("'{}' cannot be a path segment", word)));
                }
                let mut url = Url::parse(base).map_err(|e| unroutable(e.to_string()))?;
                url.path_segments_mut()
                    .map_err(|_| unroutable(format!("{} cannot take path segments", base)))?
                    .pop_if_empty()
                    .push(word);
                Ok(url)
            }
            Self::Query { base, param, suffix } => {
                let mut url = Url::parse(base).map_err(|e| unroutable(e.to_string()))?;
                let value = match suffix {
                    Some(suffix) => format!("{} {}", word, suffix),
                    None => word.to_string(),
                };
                url.query_pairs_mut().append_pair(param, &value);
                Ok(url)
            }
        }
    }
}

const JISHO: LookupTemplate = LookupTemplate::Path {
    base: "https://jisho.org/search",
};

const LAROUSSE: LookupTemplate = LookupTemplate::Path {
    base: "https://www.larousse.fr/dictionnaires/french-english",
};

const FOCLOIR: LookupTemplate = LookupTemplate::Query {
    base: "https://www.focloir.ie/en/search/ei/",
    param: "q",
    suffix: None,
};

const TEANGLANN: LookupTemplate = LookupTemplate::Path {
    base: "https://www.teanglann.ie/en/fgb",
};

const WEB_SEARCH: LookupTemplate = LookupTemplate::Query {
    base: "https://www.google.com/search",
    param: "q",
    suffix: Some("definition"),
};

/// Languages with a dedicated lookup service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupLanguage {
    Japanese,
    French,
    Irish,
    /// Anything not recognised, served by a web search
    Undetermined,
}

impl LookupLanguage {
    /// Recognise a language tag, defaulting to [`LookupLanguage::Undetermined`]
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
            return Self::Undetermined;
        };

        let primary = primary_subtag(code);
        let canonical = normalize_to_part1_or_part2t(&primary).unwrap_or(primary);
        match canonical.as_str() {
            "ja" => Self::Japanese,
            "fr" => Self::French,
            "ga" => Self::Irish,
            _ => Self::Undetermined,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::French => "fr",
            Self::Irish => "ga",
            Self::Undetermined => UNDETERMINED,
        }
    }

    /// Templates tried in order, the first one that builds wins
    pub fn templates(&self) -> &'static [LookupTemplate] {
        match self {
            Self::Japanese => &[JISHO],
            Self::French => &[LAROUSSE],
            Self::Irish => &[FOCLOIR, TEANGLANN],
            Self::Undetermined => &[WEB_SEARCH],
        }
    }
}

impl fmt::Display for LookupLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lookup URL for `word` in the language given by `language_code`
pub fn route(word: &str, language_code: Option<&str>) -> Result<Url, LookupError> {
    let language = LookupLanguage::from_code(language_code);
    debug!("Routing lookup for '{}' via {}", word, language);
    route_with(word, language.templates())
}

/// Try `templates` in order and return the first URL that builds
pub fn route_with(word: &str, templates: &[LookupTemplate]) -> Result<Url, LookupError> {
    let mut last_error = None;
    for template in templates {
        match template.build(word) {
            Ok(url) => return Ok(url),
            Err(e) => {
                warn!("Lookup template failed, trying the next one: {}", e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| LookupError::Unroutable {
        word: word.to_string(),
        reason: "no lookup template available".to_string(),
    }))
}
