use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Style tags understood by the English base speaker. The Chinese base
/// speaker only ships a default voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechStyle {
    Default,
    Whispering,
    Shouting,
    Excited,
    Cheerful,
    Terrified,
    Angry,
    Sad,
    Friendly,
}

impl SpeechStyle {
    /// Tag applied when the request carries no style field
    pub const DEFAULT_TAG: &'static str = "default";

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechStyle::Default => "default",
            SpeechStyle::Whispering => "whispering",
            SpeechStyle::Shouting => "shouting",
            SpeechStyle::Excited => "excited",
            SpeechStyle::Cheerful => "cheerful",
            SpeechStyle::Terrified => "terrified",
            SpeechStyle::Angry => "angry",
            SpeechStyle::Sad => "sad",
            SpeechStyle::Friendly => "friendly",
        }
    }

    pub fn all() -> &'static [SpeechStyle] {
        &[
            SpeechStyle::Default,
            SpeechStyle::Whispering,
            SpeechStyle::Shouting,
            SpeechStyle::Excited,
            SpeechStyle::Cheerful,
            SpeechStyle::Terrified,
            SpeechStyle::Angry,
            SpeechStyle::Sad,
            SpeechStyle::Friendly,
        ]
    }
}

impl FromStr for SpeechStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown style: {s}"))
    }
}

impl std::fmt::Display for SpeechStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
