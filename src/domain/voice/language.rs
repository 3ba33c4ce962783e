use lingua::Language;
use serde::{Deserialize, Serialize};

/// ISO 639-1 language codes the voice pipeline has base speakers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "en")]
    English,
}

impl LanguageCode {
    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Chinese => "zh",
            LanguageCode::English => "en",
        }
    }

    /// Language name the base speaker checkpoints are keyed by
    pub fn speaker_name(&self) -> &'static str {
        match self {
            LanguageCode::Chinese => "Chinese",
            LanguageCode::English => "English",
        }
    }

    /// Convert a detected lingua Language; `None` when the language has no
    /// base speaker
    pub fn from_lingua(language: Language) -> Option<Self> {
        match language {
            Language::Chinese => Some(LanguageCode::Chinese),
            Language::English => Some(LanguageCode::English),
            _ => None,
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Candidate set for the language detector. Wider than the supported pair so
/// that e.g. Japanese input is detected as Japanese and rejected, instead of
/// being forced onto the closest supported language.
pub fn detector_languages() -> Vec<Language> {
    vec![
        Language::Chinese,
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Russian,
    ]
}
