// Response generation
// Template selection and severity-driven resources for analyzed messages

mod generator;
mod templates;

pub use generator::{ResponseGenerator, ResponseResult, LOW_LEVEL_COPING_PROBABILITY};
pub use templates::{follow_up_pool, templates, ResponsePool, COPING_STRATEGIES};
