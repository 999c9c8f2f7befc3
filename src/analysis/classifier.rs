use std::cmp::Ordering;

use crate::analysis::affinity::{apply_affinity, AdjustedScore};
use crate::analysis::formatter::{format_result, published_score};
use crate::analysis::scorer;
use crate::config::ScoringConfig;
use crate::models::statistics::AnalysisStatistics;
use crate::models::titan::{ClassificationResult, UserTrait};

pub const INFLUENTIAL_FOLLOWERS: u32 = 50;
pub const ACTIVE_WITHIN_DAYS: f64 = 7.0;
pub const EXPERIENCED_YEARS: f64 = 3.0;
pub const POLYGLOT_LANGUAGES: usize = 5;
pub const LARGE_PROJECT_SIZE: f64 = 5_000.0;
pub const LONG_TERM_DAYS: f64 = 365.0;

/// Turns a statistics record into a ranked titan classification.
///
/// Never fails: an all-zero record still resolves to a titan through the
/// priority tie-break.
pub struct Classifier {
    config: ScoringConfig,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, stats: &AnalysisStatistics) -> ClassificationResult {
        // Step 1: Weighted scores plus language bonus
        let weighted = scorer::score_all(stats);
        let mut adjusted = apply_affinity(weighted, &stats.language_distribution, &self.config);

        // Step 2: Rank
        rank(&mut adjusted);

        if let Some(top) = adjusted.first() {
            tracing::debug!(
                handle = %stats.handle,
                titan = ?top.titan,
                score = top.total,
                affinity_bonus = top.affinity_bonus,
                "Selected primary titan"
            );
        }

        // Step 3: Traits come from the statistics alone
        let traits = derive_traits(stats);
        format_result(adjusted, traits)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort best first by published score, breaking ties by titan priority.
pub fn rank(scores: &mut [AdjustedScore]) {
    scores.sort_by(compare_ranked);
}

fn compare_ranked(a: &AdjustedScore, b: &AdjustedScore) -> Ordering {
    published_score(b.total)
        .cmp(&published_score(a.total))
        .then_with(|| a.titan.priority().cmp(&b.titan.priority()))
}

pub fn derive_traits(stats: &AnalysisStatistics) -> Vec<UserTrait> {
    let mut traits = Vec::new();

    if stats.follower_count > INFLUENTIAL_FOLLOWERS {
        traits.push(UserTrait::Influential);
    }
    if stats
        .days_since_last_update
        .is_some_and(|days| days < ACTIVE_WITHIN_DAYS)
    {
        traits.push(UserTrait::Active);
    }
    if stats.account_age_years > EXPERIENCED_YEARS {
        traits.push(UserTrait::Experienced);
    }
    if stats.language_count() > POLYGLOT_LANGUAGES {
        traits.push(UserTrait::Polyglot);
    }
    if stats.average_repository_size > LARGE_PROJECT_SIZE {
        traits.push(UserTrait::LargeProjects);
    }
    if stats.continuity_period_days > LONG_TERM_DAYS {
        traits.push(UserTrait::LongTermWork);
    }

    traits
}
