// Behavior tests for message analysis and response generation
//
// These exercise the public engine API end to end: analyze a message, then
// generate a reply with a seeded generator.

use mindful_chat::analysis::{EmotionalCategory, MessageAnalyzer};
use mindful_chat::crisis::CrisisLevel;
use mindful_chat::responses::{follow_up_pool, ResponseGenerator, COPING_STRATEGIES};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CRITICAL_MESSAGES: &[&str] = &[
    "I want to kill myself",
    "Sometimes I think about suicide",
    "I'd be better off dead",
    "I've been thinking of self harm again",
    "I might OVERDOSE tonight",
];

#[test]
fn test_critical_messages_get_crisis_reply() {
    let analyzer = MessageAnalyzer::default();
    let generator = ResponseGenerator::new();
    let mut rng = StdRng::seed_from_u64(42);

    for message in CRITICAL_MESSAGES {
        let analysis = analyzer.analyze(message);
        assert_eq!(analysis.crisis_level, CrisisLevel::Critical, "{}", message);

        let reply = generator.generate(message, &analysis, &mut rng);
        assert!(reply.crisis_detected);
        assert_eq!(reply.suggested_actions.map(|a| a.len()), Some(4));
    }
}

#[test]
fn test_neutral_message_is_low() {
    let analysis = MessageAnalyzer::default().analyze("I had a nice walk today");

    assert_eq!(analysis.crisis_level, CrisisLevel::Low);
    assert!(analysis.detected_keywords.is_empty());
}

#[test]
fn test_critical_beats_medium() {
    let analysis = MessageAnalyzer::default().analyze("My anxiety makes me think about suicide");

    assert_eq!(analysis.crisis_level, CrisisLevel::Critical);
    assert_eq!(analysis.detected_keywords, vec!["suicide".to_string()]);
}

#[test]
fn test_depression_beats_anxiety() {
    let analysis = MessageAnalyzer::default().analyze("I'm depressed and anxious");

    assert_eq!(analysis.emotional_category, EmotionalCategory::Depression);
}

#[test]
fn test_hopeless_message_is_high() {
    let message = "I feel hopeless and want to give up";
    let analysis = MessageAnalyzer::default().analyze(message);

    assert_eq!(analysis.crisis_level, CrisisLevel::High);
    assert_eq!(analysis.detected_keywords, vec!["hopeless".to_string()]);

    let mut rng = StdRng::seed_from_u64(8);
    let reply = ResponseGenerator::new().generate(message, &analysis, &mut rng);

    assert!(reply.crisis_detected);
    assert_eq!(reply.crisis_level, CrisisLevel::High);
    assert_eq!(reply.suggested_actions.map(|a| a.len()), Some(4));
    assert_eq!(
        reply.follow_up.as_deref(),
        Some("I'm here to support you, but please also consider reaching out to professional help.")
    );
}

#[test]
fn test_low_coping_strategy_about_thirty_percent() {
    let analyzer = MessageAnalyzer::default();
    let generator = ResponseGenerator::new();
    let analysis = analyzer.analyze("It was an ordinary day");
    assert_eq!(analysis.crisis_level, CrisisLevel::Low);

    let mut rng = StdRng::seed_from_u64(1);
    let trials = 1000;
    let mut with_strategy = 0;
    for _ in 0..trials {
        let reply = generator.generate("It was an ordinary day", &analysis, &mut rng);
        if let Some(strategy) = reply.coping_strategy {
            assert!(COPING_STRATEGIES.contains(&strategy.as_str()));
            with_strategy += 1;
        }
    }

    let rate = with_strategy as f64 / trials as f64;
    assert!((0.25..=0.35).contains(&rate), "rate was {}", rate);
}

#[test]
fn test_follow_up_questions_sampled_without_repeats() {
    let analyzer = MessageAnalyzer::default();
    let generator = ResponseGenerator::new();
    let analysis = analyzer.analyze("I'm worried about my exams");
    let pool = follow_up_pool(analysis.emotional_category);

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let questions = generator.follow_up_questions(&analysis, &mut rng);

        assert!(questions.len() <= 2);
        assert!(questions.iter().all(|q| pool.contains(&q.as_str())));
        if questions.len() == 2 {
            assert_ne!(questions[0], questions[1]);
        }
    }
}

#[test]
fn test_analysis_ignores_timestamp_for_repeatability() {
    let analyzer = MessageAnalyzer::default();
    let message = "Everything is falling apart and I'm nervous";

    let first = analyzer.analyze(message);
    let second = analyzer.analyze(message);

    assert_eq!(first.crisis_level, second.crisis_level);
    assert_eq!(first.emotional_category, second.emotional_category);
    assert_eq!(first.detected_keywords, second.detected_keywords);
}

#[test]
fn test_concurrent_analysis_shares_tables() {
    let analyzer = std::sync::Arc::new(MessageAnalyzer::default());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let analyzer = analyzer.clone();
            std::thread::spawn(move || {
                let message = if i % 2 == 0 { "I want to die" } else { "lovely weather" };
                analyzer.analyze(message).crisis_level
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let level = handle.join().unwrap();
        let expected = if i % 2 == 0 { CrisisLevel::Critical } else { CrisisLevel::Low };
        assert_eq!(level, expected);
    }
}
