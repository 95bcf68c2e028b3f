// Message analysis
// Crisis level and emotional category classification for one message

mod analyzer;
mod category;
mod clock;

pub use analyzer::{AnalysisResult, MessageAnalyzer};
pub use category::{EmotionalCategory, ANXIETY_INDICATORS, DEPRESSION_INDICATORS};
pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
