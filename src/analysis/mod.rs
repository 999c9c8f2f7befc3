pub mod aggregator;
pub mod scorer;
pub mod affinity;
pub mod classifier;
pub mod formatter;
pub mod pipeline;

pub use aggregator::{aggregate, aggregate_at};
pub use affinity::{affinity_bonus, apply_affinity, AdjustedScore};
pub use classifier::{derive_traits, Classifier};
pub use formatter::format_result;
pub use pipeline::AnalysisPipeline;
pub use scorer::{score, score_all, score_with_breakdown, WeightedScore};
