//! Supported language set
//!
//! The visualizer offers a fixed, small set of languages. Codes are stable
//! identifiers for the API surface; names are what goes into the translation
//! prompt and the UI.

use serde::{Deserialize, Serialize};

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mr")]
    Marathi,
}

impl Language {
    /// All supported languages, in UI order.
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Marathi];

    /// Stable language code, e.g. `"en"`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    /// Human-readable name, used in translation prompts and menus.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
        }
    }

    /// Look up a language by its code.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A source/target language pair for one translation run.
///
/// The engine exposes a swap operation on the current pair; swapping is
/// only permitted while no run is active (`Idle` or `Done`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub from: Language,
    pub to: Language,
}

impl LanguagePair {
    pub fn new(from: Language, to: Language) -> Self {
        LanguagePair { from, to }
    }

    /// The same pair with source and target exchanged.
    pub fn swapped(&self) -> LanguagePair {
        LanguagePair {
            from: self.to,
            to: self.from,
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        LanguagePair::new(Language::English, Language::Hindi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Language::English.name(), "English");
        assert_eq!(Language::Hindi.name(), "Hindi");
        assert_eq!(Language::Marathi.name(), "Marathi");
    }

    #[test]
    fn test_swap() {
        let pair = LanguagePair::new(Language::English, Language::Hindi);
        let swapped = pair.swapped();
        assert_eq!(swapped.from, Language::Hindi);
        assert_eq!(swapped.to, Language::English);
        assert_eq!(swapped.swapped(), pair);
    }

    #[test]
    fn test_default_pair() {
        let pair = LanguagePair::default();
        assert_eq!(pair.from, Language::English);
        assert_eq!(pair.to, Language::Hindi);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Hindi).unwrap();
        assert_eq!(json, "\"hi\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
