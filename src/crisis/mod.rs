// Crisis module
// Keyword-based crisis level detection and static crisis resources

mod detector;
mod level;
pub mod resources;

pub use detector::{CrisisDetector, CrisisMatch, KeywordTable};
pub use level::CrisisLevel;
pub use resources::{crisis_resources, CrisisResources};
