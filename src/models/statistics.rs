use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Repository size at or above which a repository counts as medium.
pub const MEDIUM_REPO_SIZE: u64 = 1_000;
/// Repository size at or above which a repository counts as large.
pub const LARGE_REPO_SIZE: u64 = 10_000;

/// Fixed-shape summary of a user's public activity.
///
/// Built once per classification run by the aggregator and never mutated
/// afterwards. Every numeric field is non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStatistics {
    pub handle: String,
    pub follower_count: u32,
    /// Public repository count as reported on the user record.
    pub public_repo_count: u32,
    /// Number of public repositories that went into the aggregates below.
    pub analyzed_repository_count: u32,
    pub account_age_years: f64,
    /// Repositories per primary language. Languages with no repository are absent.
    pub language_distribution: BTreeMap<String, u32>,
    pub total_repository_size: u64,
    pub average_repository_size: f64,
    pub max_repository_size: u64,
    /// Days since the most recently updated public repository.
    ///
    /// This tracks repository `updated_at`, which also moves on metadata
    /// edits, so it approximates rather than measures commit recency.
    /// `None` when the user has no public repositories.
    pub days_since_last_update: Option<f64>,
    pub repository_size_distribution: SizeDistribution,
    pub continuity_period_days: f64,
}

impl AnalysisStatistics {
    pub fn language_count(&self) -> usize {
        self.language_distribution.len()
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.language_distribution
            .get(language)
            .is_some_and(|&count| count > 0)
    }

    /// Number of languages from `set` the user has at least one repository in.
    pub fn count_languages_in(&self, set: &[&str]) -> usize {
        set.iter().filter(|lang| self.has_language(lang)).count()
    }
}

/// Repository counts bucketed by size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeDistribution {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl SizeDistribution {
    pub fn record(&mut self, size: u64) {
        match size {
            s if s < MEDIUM_REPO_SIZE => self.small += 1,
            s if s < LARGE_REPO_SIZE => self.medium += 1,
            _ => self.large += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.small + self.medium + self.large
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_buckets() {
        let mut dist = SizeDistribution::default();
        for size in [0, 999, 1_000, 9_999, 10_000, 250_000] {
            dist.record(size);
        }
        assert_eq!(
            dist,
            SizeDistribution {
                small: 2,
                medium: 2,
                large: 2,
            }
        );
        assert_eq!(dist.total(), 6);
    }

    #[test]
    fn test_language_set_counting() {
        let mut stats = AnalysisStatistics::default();
        stats.language_distribution.insert("Rust".to_string(), 3);
        stats.language_distribution.insert("Go".to_string(), 1);
        stats.language_distribution.insert("Python".to_string(), 2);

        assert_eq!(stats.language_count(), 3);
        assert_eq!(stats.count_languages_in(&["Go", "Rust", "Java"]), 2);
        assert!(!stats.has_language("Java"));
    }
}
