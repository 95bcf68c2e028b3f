// Crisis severity levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse severity classification of a single message.
///
/// Variants are declared in ascending severity, so the derived ordering
/// is `Low < Medium < High < Critical`. Detection never compares levels
/// numerically; it walks [`CrisisLevel::DETECTION_ORDER`] and stops at the
/// first level with a matching phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrisisLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl CrisisLevel {
    /// Levels that carry keyword lists, highest priority first.
    /// `Low` is the fallback and has no keywords.
    pub const DETECTION_ORDER: [CrisisLevel; 3] =
        [CrisisLevel::Critical, CrisisLevel::High, CrisisLevel::Medium];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrisisLevel::Low => "low",
            CrisisLevel::Medium => "medium",
            CrisisLevel::High => "high",
            CrisisLevel::Critical => "critical",
        }
    }

    /// Whether responses at this level are flagged as a crisis
    pub fn is_crisis(&self) -> bool {
        matches!(self, CrisisLevel::High | CrisisLevel::Critical)
    }
}

impl Default for CrisisLevel {
    fn default() -> Self {
        CrisisLevel::Low
    }
}

impl fmt::Display for CrisisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
