pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod taxonomy;
pub mod analysis;

pub use config::{Config, PipelineConfig, ScoringConfig};
pub use error::{Error, Result};
pub use github::{FixtureSource, GitHubClient, ProfileSource};
pub use analysis::{AnalysisPipeline, Classifier};
