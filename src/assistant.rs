// Support assistant
// Runs analysis and response generation for one message and shapes the wire payload

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, EmotionalCategory, MessageAnalyzer};
use crate::responses::{ResponseGenerator, ResponseResult};

/// Analysis metadata attached to every chat reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub emotional_category: EmotionalCategory,
    pub message_length: usize,
    pub timestamp: String,
}

impl From<&AnalysisResult> for AnalysisSummary {
    fn from(analysis: &AnalysisResult) -> Self {
        Self {
            emotional_category: analysis.emotional_category,
            message_length: analysis.message_length,
            timestamp: analysis.timestamp.clone(),
        }
    }
}

/// JSON body returned for a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(flatten)]
    pub response: ResponseResult,
    pub analysis: AnalysisSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct SupportAssistant {
    analyzer: MessageAnalyzer,
    generator: ResponseGenerator,
}

impl SupportAssistant {
    pub fn new(analyzer: MessageAnalyzer, generator: ResponseGenerator) -> Self {
        Self {
            analyzer,
            generator,
        }
    }

    pub fn analyze(&self, message: &str) -> AnalysisResult {
        self.analyzer.analyze(message)
    }

    /// Analyze a message and build its reply.
    /// `with_follow_up_questions` additionally samples follow-up questions.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        message: &str,
        with_follow_up_questions: bool,
        rng: &mut R,
    ) -> ChatReply {
        let analysis = self.analyzer.analyze(message);
        self.respond_to_analysis(message, &analysis, with_follow_up_questions, rng)
    }

    /// Build the reply for an analysis that was already computed
    pub fn respond_to_analysis<R: Rng + ?Sized>(
        &self,
        message: &str,
        analysis: &AnalysisResult,
        with_follow_up_questions: bool,
        rng: &mut R,
    ) -> ChatReply {
        let response = self.generator.generate(message, analysis, rng);

        let follow_up_questions = if with_follow_up_questions {
            Some(self.generator.follow_up_questions(analysis, rng))
        } else {
            None
        };

        tracing::info!(
            category = %analysis.emotional_category,
            crisis_level = %analysis.crisis_level,
            "Generated response"
        );

        ChatReply {
            analysis: AnalysisSummary::from(analysis),
            response,
            follow_up_questions,
        }
    }
}
