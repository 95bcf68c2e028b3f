// Mindful Chat - Supportive chat backend
// Library exports

pub mod analysis; // Crisis level + emotional category classification
pub mod assistant;
pub mod config;
pub mod crisis;
pub mod errors;
pub mod responses; // Template selection
pub mod server; // HTTP transport shell
