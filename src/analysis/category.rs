// Emotional category classification

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEPRESSION_INDICATORS: &[&str] = &["depressed", "depression", "down", "sad", "hopeless"];

pub const ANXIETY_INDICATORS: &[&str] = &["anxiety", "anxious", "worried", "panic", "nervous"];

/// Affect of a message, independent of its crisis level.
/// Only used to pick which template pool answers non-crisis messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalCategory {
    Depression,
    Anxiety,
    GeneralSupport,
}

impl EmotionalCategory {
    /// Classify an already lowercased message.
    /// Depression indicators are checked first and win when both sets match.
    pub fn classify_lowercase(message_lower: &str) -> Self {
        let contains_any = |words: &[&str]| words.iter().any(|w| message_lower.contains(w));

        if contains_any(DEPRESSION_INDICATORS) {
            EmotionalCategory::Depression
        } else if contains_any(ANXIETY_INDICATORS) {
            EmotionalCategory::Anxiety
        } else {
            EmotionalCategory::GeneralSupport
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalCategory::Depression => "depression",
            EmotionalCategory::Anxiety => "anxiety",
            EmotionalCategory::GeneralSupport => "general_support",
        }
    }
}

impl Default for EmotionalCategory {
    fn default() -> Self {
        EmotionalCategory::GeneralSupport
    }
}

impl fmt::Display for EmotionalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
