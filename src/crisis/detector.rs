// Crisis keyword detector

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::CrisisLevel;

const CRITICAL_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "not worth living",
    "better off dead",
    "want to die",
    "hurt myself",
    "self harm",
    "cut myself",
    "overdose",
    "jump off",
    "hang myself",
];

const HIGH_KEYWORDS: &[&str] = &[
    "hopeless",
    "no point",
    "give up",
    "can't go on",
    "worthless",
    "burden",
    "everyone would be better off",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "depressed",
    "anxiety",
    "panic",
    "overwhelmed",
    "can't cope",
    "breaking down",
    "falling apart",
];

/// Ordered keyword phrases per crisis level.
///
/// Phrases are stored lowercase and matched as plain substrings of the
/// lowercased message, so "mass" would also match inside "massive".
///
/// A level missing from a keywords file loads as an empty list, but a file
/// with no phrases at all is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    #[serde(default)]
    pub critical: Vec<String>,
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
}

impl KeywordTable {
    /// Load a keyword table from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crisis keywords file: {}", path.display()))?;

        let table: KeywordTable = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse crisis keywords file: {}", path.display()))?;

        let table = table.normalized();
        if table.is_empty() {
            anyhow::bail!("Crisis keywords file has no phrases: {}", path.display());
        }

        Ok(table)
    }

    /// Keywords for a level, in scan order. `Low` has none.
    pub fn keywords(&self, level: CrisisLevel) -> &[String] {
        match level {
            CrisisLevel::Critical => &self.critical,
            CrisisLevel::High => &self.high,
            CrisisLevel::Medium => &self.medium,
            CrisisLevel::Low => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.high.len() + self.medium.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn normalized(self) -> Self {
        let lower = |phrases: Vec<String>| -> Vec<String> {
            phrases
                .into_iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect()
        };

        Self {
            critical: lower(self.critical),
            high: lower(self.high),
            medium: lower(self.medium),
        }
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        fn owned(phrases: &[&str]) -> Vec<String> {
            phrases.iter().map(|p| p.to_string()).collect()
        }

        Self {
            critical: owned(CRITICAL_KEYWORDS),
            high: owned(HIGH_KEYWORDS),
            medium: owned(MEDIUM_KEYWORDS),
        }
    }
}

/// Result of scanning a message for crisis keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisMatch {
    pub level: CrisisLevel,
    /// At most one phrase: the first match at the winning level
    pub detected_keywords: Vec<String>,
}

impl CrisisMatch {
    fn none() -> Self {
        Self {
            level: CrisisLevel::Low,
            detected_keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CrisisDetector {
    keywords: KeywordTable,
}

impl CrisisDetector {
    pub fn new(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    /// Load crisis keywords from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(KeywordTable::load_from_file(path)?))
    }

    /// Scan an already lowercased message.
    ///
    /// Levels are checked from most to least severe and the scan stops at
    /// the first matching phrase, so only one keyword is ever reported.
    pub fn scan_lowercase(&self, message_lower: &str) -> CrisisMatch {
        for level in CrisisLevel::DETECTION_ORDER {
            if let Some(keyword) = self
                .keywords
                .keywords(level)
                .iter()
                .find(|keyword| message_lower.contains(keyword.as_str()))
            {
                tracing::warn!(crisis_level = %level, keyword = %keyword, "Crisis keyword detected");
                return CrisisMatch {
                    level,
                    detected_keywords: vec![keyword.clone()],
                };
            }
        }

        CrisisMatch::none()
    }

    /// Detect the crisis level of a message (case-insensitive)
    pub fn detect(&self, message: &str) -> CrisisMatch {
        self.scan_lowercase(&message.to_lowercase())
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }
}
