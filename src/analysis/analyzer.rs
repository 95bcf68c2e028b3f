// Message analyzer

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::clock::{format_timestamp, Clock, SystemClock};
use super::EmotionalCategory;
use crate::crisis::{CrisisDetector, CrisisLevel};

/// Classification of a single message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub crisis_level: CrisisLevel,
    pub emotional_category: EmotionalCategory,
    pub detected_keywords: Vec<String>,
    /// Length in characters, not bytes
    pub message_length: usize,
    pub timestamp: String,
}

/// Stateless analyzer over an immutable keyword table.
/// Safe to share across any number of concurrent requests.
#[derive(Clone)]
pub struct MessageAnalyzer {
    detector: CrisisDetector,
    clock: Arc<dyn Clock>,
}

impl MessageAnalyzer {
    pub fn new(detector: CrisisDetector, clock: Arc<dyn Clock>) -> Self {
        Self { detector, clock }
    }

    pub fn with_detector(detector: CrisisDetector) -> Self {
        Self::new(detector, Arc::new(SystemClock))
    }

    /// Analyze a message. Never fails; empty input is simply LOW / general support.
    pub fn analyze(&self, message: &str) -> AnalysisResult {
        let message_lower = message.to_lowercase();

        let crisis = self.detector.scan_lowercase(&message_lower);
        let emotional_category = EmotionalCategory::classify_lowercase(&message_lower);

        tracing::debug!(
            crisis_level = %crisis.level,
            category = %emotional_category,
            "Message analyzed"
        );

        AnalysisResult {
            crisis_level: crisis.level,
            emotional_category,
            detected_keywords: crisis.detected_keywords,
            message_length: message.chars().count(),
            timestamp: format_timestamp(self.clock.now()),
        }
    }
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::with_detector(CrisisDetector::default())
    }
}

impl std::fmt::Debug for MessageAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageAnalyzer")
            .field("keywords", &self.detector.keywords().len())
            .finish_non_exhaustive()
    }
}
