pub mod engine;


pub use engine::{EngineConfig, ScoringConfig};
