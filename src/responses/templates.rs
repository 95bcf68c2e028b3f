// Static reply templates, coping strategies, and follow-up questions

use crate::analysis::EmotionalCategory;

/// Template pools a reply can be drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponsePool {
    Depression,
    Anxiety,
    GeneralSupport,
    CrisisResponse,
}

impl ResponsePool {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponsePool::Depression => "depression",
            ResponsePool::Anxiety => "anxiety",
            ResponsePool::GeneralSupport => "general_support",
            ResponsePool::CrisisResponse => "crisis_response",
        }
    }
}

impl From<EmotionalCategory> for ResponsePool {
    fn from(category: EmotionalCategory) -> Self {
        match category {
            EmotionalCategory::Depression => ResponsePool::Depression,
            EmotionalCategory::Anxiety => ResponsePool::Anxiety,
            EmotionalCategory::GeneralSupport => ResponsePool::GeneralSupport,
        }
    }
}

const DEPRESSION_TEMPLATES: &[&str] = &[
    "I hear that you're feeling down, and I want you to know that your feelings are completely valid. It takes real courage to share what you're going through. Can you tell me more about what's contributing to these feelings?",
    "Feeling depressed can be incredibly overwhelming, and I want you to know that you're not alone in this. Reaching out shows incredible strength. What's one small thing that might help you feel a little better right now?",
    "I'm here with you in this difficult moment. Sometimes when we're feeling depressed, it helps to remember that feelings are temporary, even when they don't feel that way. What's been weighing on your mind lately?",
    "Depression can make everything feel so much harder than it should be. You're doing great by reaching out and talking about it. What's one thing that usually brings you even a small amount of comfort?",
];

const ANXIETY_TEMPLATES: &[&str] = &[
    "Anxiety can feel so overwhelming, and I want you to know that what you're experiencing is real and valid. Let's work through this together. What specific thoughts or situations are making you feel anxious right now?",
    "It sounds like anxiety is really affecting you today. That takes a lot of strength to acknowledge and share. Sometimes it helps to focus on your breathing - can you try taking three slow, deep breaths with me?",
    "Anxiety can make everything feel so much harder. You're doing great by reaching out. What's one thing that usually helps you feel a bit calmer when anxiety strikes?",
    "I understand how challenging anxiety can be. Your feelings are important, and I'm here to listen. What would be most helpful for you right now - talking through what's worrying you, or focusing on some calming techniques?",
];

const GENERAL_SUPPORT_TEMPLATES: &[&str] = &[
    "Thank you for sharing that with me. I'm here to listen and support you without judgment. Can you tell me more about what's on your mind?",
    "I hear you, and I want you to know that your feelings are important and valid. What would be most helpful for you right now?",
    "Thank you for trusting me with your thoughts. I'm here to help you work through whatever you're experiencing. What's been weighing on you lately?",
    "I'm really glad you're reaching out. That's such an important step in taking care of yourself. What feelings are you experiencing right now?",
    "Your courage in sharing this means a lot. I'm here to listen and support you. What's going on inside that you'd like to talk about?",
];

const CRISIS_RESPONSE_TEMPLATES: &[&str] = &[
    "I'm really concerned about what you've shared. Your life has value, and there are people who want to help you. Please reach out to a crisis helpline or emergency services right away. You don't have to face this alone.",
    "What you're experiencing sounds very serious, and I want you to know that help is available. Please contact a crisis counselor or emergency services immediately. Your life matters.",
    "I'm worried about your safety. Please reach out to someone who can help you right now - a crisis helpline, emergency services, or a trusted person in your life. You deserve support.",
];

pub const COPING_STRATEGIES: &[&str] = &[
    "Try taking 5 deep breaths, counting to 4 on each inhale and exhale",
    "Focus on one small thing you can do right now - even something as simple as drinking a glass of water",
    "Remember that feelings are temporary, even when they don't feel that way",
    "Consider reaching out to a trusted friend or family member",
    "Try some gentle movement or stretching if you're able",
    "Write down three things you're grateful for, no matter how small",
    "Listen to calming music or sounds that you find soothing",
    "Try the 5-4-3-2-1 grounding technique: name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, 1 you can taste",
];

const DEPRESSION_QUESTIONS: &[&str] = &[
    "What's been contributing to these feelings lately?",
    "Have you noticed any patterns in when you feel this way?",
    "What usually helps you feel a little better, even temporarily?",
    "How long have you been feeling this way?",
];

const ANXIETY_QUESTIONS: &[&str] = &[
    "What specific thoughts or situations are making you feel anxious?",
    "Have you tried any techniques that have helped with anxiety before?",
    "What does anxiety feel like in your body right now?",
    "Is there something particular that triggered these feelings?",
];

const GENERAL_SUPPORT_QUESTIONS: &[&str] = &[
    "Can you tell me more about what's on your mind?",
    "What would be most helpful for you right now?",
    "How are you feeling about everything that's happening?",
    "What's been weighing on you lately?",
];

/// Reply templates for a pool
pub fn templates(pool: ResponsePool) -> &'static [&'static str] {
    match pool {
        ResponsePool::Depression => DEPRESSION_TEMPLATES,
        ResponsePool::Anxiety => ANXIETY_TEMPLATES,
        ResponsePool::GeneralSupport => GENERAL_SUPPORT_TEMPLATES,
        ResponsePool::CrisisResponse => CRISIS_RESPONSE_TEMPLATES,
    }
}

/// Follow-up questions for a category
pub fn follow_up_pool(category: EmotionalCategory) -> &'static [&'static str] {
    match category {
        EmotionalCategory::Depression => DEPRESSION_QUESTIONS,
        EmotionalCategory::Anxiety => ANXIETY_QUESTIONS,
        EmotionalCategory::GeneralSupport => GENERAL_SUPPORT_QUESTIONS,
    }
}
