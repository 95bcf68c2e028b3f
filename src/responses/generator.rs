// Response generator
//
// Maps an analysis result to a reply. All randomness comes from the caller's
// generator so tests can use a seeded one; no state is kept between calls.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::templates::{follow_up_pool, templates, ResponsePool, COPING_STRATEGIES};
use crate::analysis::AnalysisResult;
use crate::crisis::CrisisLevel;

/// Chance that a LOW-level reply carries a coping strategy
pub const LOW_LEVEL_COPING_PROBABILITY: f64 = 0.3;

const FOLLOW_UP_QUESTION_COUNT: usize = 2;

const CRITICAL_ACTIONS: [&str; 4] = [
    "Contact emergency services (911) immediately",
    "Call the National Suicide Prevention Lifeline at 988",
    "Text HOME to 741741 for Crisis Text Line",
    "Reach out to a trusted person in your life",
];

const CRITICAL_FOLLOW_UP: &str = "Please know that your life has value and there are people who want to help you through this difficult time.";

const HIGH_ACTIONS: [&str; 4] = [
    "Consider reaching out to a mental health professional",
    "Call the National Suicide Prevention Lifeline at 988",
    "Talk to a trusted friend or family member",
    "Try some grounding techniques",
];

const HIGH_FOLLOW_UP: &str =
    "I'm here to support you, but please also consider reaching out to professional help.";

const MEDIUM_ACTIONS: [&str; 4] = [
    "Consider talking to a mental health professional",
    "Try some coping strategies",
    "Reach out to supportive people in your life",
    "Practice self-care activities",
];

/// Reply payload for one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseResult {
    pub message: String,
    pub crisis_detected: bool,
    pub crisis_level: CrisisLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    #[serde(default)]
    pub coping_strategy: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build a reply from an analysis.
    ///
    /// `_message` is accepted alongside the analysis but does not influence
    /// the reply; only the crisis level and category do.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        _message: &str,
        analysis: &AnalysisResult,
        rng: &mut R,
    ) -> ResponseResult {
        let category_pool = ResponsePool::from(analysis.emotional_category);
        tracing::debug!(
            crisis_level = %analysis.crisis_level,
            category_pool = category_pool.as_str(),
            "Selecting reply"
        );

        match analysis.crisis_level {
            CrisisLevel::Critical => ResponseResult {
                message: pick(templates(ResponsePool::CrisisResponse), rng),
                crisis_detected: analysis.crisis_level.is_crisis(),
                crisis_level: CrisisLevel::Critical,
                suggested_actions: Some(owned(&CRITICAL_ACTIONS)),
                follow_up: Some(CRITICAL_FOLLOW_UP.to_string()),
                coping_strategy: None,
            },
            CrisisLevel::High => ResponseResult {
                message: pick(templates(ResponsePool::CrisisResponse), rng),
                crisis_detected: analysis.crisis_level.is_crisis(),
                crisis_level: CrisisLevel::High,
                suggested_actions: Some(owned(&HIGH_ACTIONS)),
                follow_up: Some(HIGH_FOLLOW_UP.to_string()),
                coping_strategy: None,
            },
            CrisisLevel::Medium => {
                let message = pick(templates(category_pool), rng);
                ResponseResult {
                    message,
                    crisis_detected: analysis.crisis_level.is_crisis(),
                    crisis_level: CrisisLevel::Medium,
                    suggested_actions: Some(owned(&MEDIUM_ACTIONS)),
                    follow_up: None,
                    coping_strategy: Some(pick(COPING_STRATEGIES, rng)),
                }
            }
            CrisisLevel::Low => {
                let message = pick(templates(category_pool), rng);
                let coping_strategy = if rng.gen::<f64>() < LOW_LEVEL_COPING_PROBABILITY {
                    Some(pick(COPING_STRATEGIES, rng))
                } else {
                    None
                };

                ResponseResult {
                    message,
                    crisis_detected: analysis.crisis_level.is_crisis(),
                    crisis_level: CrisisLevel::Low,
                    suggested_actions: None,
                    follow_up: None,
                    coping_strategy,
                }
            }
        }
    }

    /// Up to two distinct follow-up questions for the analysis category,
    /// in random order
    pub fn follow_up_questions<R: Rng + ?Sized>(
        &self,
        analysis: &AnalysisResult,
        rng: &mut R,
    ) -> Vec<String> {
        let pool = follow_up_pool(analysis.emotional_category);
        let count = FOLLOW_UP_QUESTION_COUNT.min(pool.len());

        pool.choose_multiple(rng, count)
            .map(|question| question.to_string())
            .collect()
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng).map(|s| s.to_string()).unwrap_or_default()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::EmotionalCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn analysis(level: CrisisLevel, category: EmotionalCategory) -> AnalysisResult {
        AnalysisResult {
            crisis_level: level,
            emotional_category: category,
            detected_keywords: Vec::new(),
            message_length: 0,
            timestamp: "2024-01-01T00:00:00.000000".to_string(),
        }
    }

    #[test]
    fn test_critical_response() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = ResponseGenerator::new().generate(
            "",
            &analysis(CrisisLevel::Critical, EmotionalCategory::GeneralSupport),
            &mut rng,
        );

        assert!(result.crisis_detected);
        assert_eq!(result.crisis_level, CrisisLevel::Critical);
        assert!(templates(ResponsePool::CrisisResponse).contains(&result.message.as_str()));
        assert_eq!(result.suggested_actions, Some(owned(&CRITICAL_ACTIONS)));
        assert_eq!(result.follow_up.as_deref(), Some(CRITICAL_FOLLOW_UP));
        assert!(result.coping_strategy.is_none());
    }

    #[test]
    fn test_high_response_uses_crisis_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = ResponseGenerator::new().generate(
            "",
            &analysis(CrisisLevel::High, EmotionalCategory::Depression),
            &mut rng,
        );

        assert!(result.crisis_detected);
        assert!(templates(ResponsePool::CrisisResponse).contains(&result.message.as_str()));
        assert_eq!(
            result.suggested_actions,
            Some(HIGH_ACTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        );
        assert_eq!(result.follow_up.as_deref(), Some(HIGH_FOLLOW_UP));
    }

    #[test]
    fn test_medium_response_always_has_coping_strategy() {
        let generator = ResponseGenerator::new();
        let input = analysis(CrisisLevel::Medium, EmotionalCategory::Anxiety);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = generator.generate("", &input, &mut rng);

            assert!(!result.crisis_detected);
            assert!(templates(ResponsePool::Anxiety).contains(&result.message.as_str()));
            assert_eq!(result.suggested_actions.as_ref().map(Vec::len), Some(4));
            assert!(result.follow_up.is_none());
            let strategy = result.coping_strategy.expect("medium always has a strategy");
            assert!(COPING_STRATEGIES.contains(&strategy.as_str()));
        }
    }

    #[test]
    fn test_crisis_flag_follows_level() {
        let generator = ResponseGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);

        for level in [
            CrisisLevel::Critical,
            CrisisLevel::High,
            CrisisLevel::Medium,
            CrisisLevel::Low,
        ] {
            let input = analysis(level, EmotionalCategory::GeneralSupport);
            let result = generator.generate("", &input, &mut rng);
            assert_eq!(result.crisis_detected, level.is_crisis(), "{}", level);
            assert_eq!(result.crisis_level, level);
        }
    }

    #[test]
    fn test_depression_category_uses_depression_pool() {
        let generator = ResponseGenerator::new();

        for level in [CrisisLevel::Low, CrisisLevel::Medium] {
            let input = analysis(level, EmotionalCategory::Depression);
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = generator.generate("", &input, &mut rng);

                assert!(
                    templates(ResponsePool::Depression).contains(&result.message.as_str()),
                    "{} reply came from the wrong pool",
                    level
                );
            }
        }
    }

    #[test]
    fn test_low_response_has_no_actions() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = ResponseGenerator::new().generate(
            "",
            &analysis(CrisisLevel::Low, EmotionalCategory::GeneralSupport),
            &mut rng,
        );

        assert!(!result.crisis_detected);
        assert!(templates(ResponsePool::GeneralSupport).contains(&result.message.as_str()));
        assert!(result.suggested_actions.is_none());
        assert!(result.follow_up.is_none());
    }

    #[test]
    fn test_low_coping_strategy_rate() {
        let generator = ResponseGenerator::new();
        let input = analysis(CrisisLevel::Low, EmotionalCategory::Depression);
        let mut rng = StdRng::seed_from_u64(2024);

        let trials = 1000;
        let with_strategy = (0..trials)
            .filter(|_| generator.generate("", &input, &mut rng).coping_strategy.is_some())
            .count();

        let rate = with_strategy as f64 / trials as f64;
        assert!((0.25..=0.35).contains(&rate), "rate was {}", rate);
    }

    #[test]
    fn test_follow_up_questions_are_distinct_and_from_pool() {
        let generator = ResponseGenerator::new();

        for category in [
            EmotionalCategory::Depression,
            EmotionalCategory::Anxiety,
            EmotionalCategory::GeneralSupport,
        ] {
            let input = analysis(CrisisLevel::Low, category);
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let questions = generator.follow_up_questions(&input, &mut rng);

                assert_eq!(questions.len(), 2);
                assert_ne!(questions[0], questions[1]);
                for q in &questions {
                    assert!(follow_up_pool(category).contains(&q.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_reply() {
        let generator = ResponseGenerator::new();
        let input = analysis(CrisisLevel::Low, EmotionalCategory::Anxiety);

        let first = generator.generate("", &input, &mut StdRng::seed_from_u64(99));
        let second = generator.generate("", &input, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_low_serializes_null_coping_strategy() {
        let result = ResponseResult {
            message: "hi".to_string(),
            crisis_detected: false,
            crisis_level: CrisisLevel::Low,
            suggested_actions: None,
            follow_up: None,
            coping_strategy: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("suggested_actions").is_none());
        assert!(json.get("follow_up").is_none());
        assert!(json["coping_strategy"].is_null());
        assert_eq!(json["crisis_level"], "low");
    }
}
