use std::collections::BTreeMap;
use chrono::{DateTime, Utc};

use crate::models::statistics::{AnalysisStatistics, SizeDistribution};
use crate::models::user::{GitHubUser, Repository};

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Derive the statistics record for `user` as of the current instant.
pub fn aggregate(user: &GitHubUser, repositories: &[Repository]) -> AnalysisStatistics {
    aggregate_at(user, repositories, Utc::now())
}

/// Derive the statistics record for `user` as of `now`.
///
/// Private repositories are dropped before anything is computed. Elapsed
/// times that come out negative (timestamps after `now`) are clamped to 0.
pub fn aggregate_at(
    user: &GitHubUser,
    repositories: &[Repository],
    now: DateTime<Utc>,
) -> AnalysisStatistics {
    let public: Vec<&Repository> = repositories.iter().filter(|r| !r.is_private).collect();

    let mut language_distribution: BTreeMap<String, u32> = BTreeMap::new();
    let mut repository_size_distribution = SizeDistribution::default();
    let mut total_repository_size: u64 = 0;
    let mut max_repository_size: u64 = 0;

    for repo in &public {
        if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
            *language_distribution.entry(language.to_string()).or_insert(0) += 1;
        }
        repository_size_distribution.record(repo.size);
        total_repository_size = total_repository_size.saturating_add(repo.size);
        max_repository_size = max_repository_size.max(repo.size);
    }

    let average_repository_size = if public.is_empty() {
        0.0
    } else {
        total_repository_size as f64 / public.len() as f64
    };

    let days_since_last_update = public
        .iter()
        .map(|r| r.updated_at)
        .max()
        .map(|latest| days_between(latest, now));

    let oldest = public.iter().map(|r| r.created_at).min();
    let newest = public.iter().map(|r| r.created_at).max();
    let continuity_period_days = match (oldest, newest) {
        (Some(oldest), Some(newest)) => days_between(oldest, newest),
        _ => 0.0,
    };

    let account_age_years = days_between(user.created_at, now) / DAYS_PER_YEAR;

    AnalysisStatistics {
        handle: user.login.clone(),
        follower_count: user.followers,
        public_repo_count: user.public_repos,
        analyzed_repository_count: public.len() as u32,
        account_age_years,
        language_distribution,
        total_repository_size,
        average_repository_size,
        max_repository_size,
        days_since_last_update,
        repository_size_distribution,
        continuity_period_days,
    }
}

/// Whole and fractional days from `from` to `to`, never negative.
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    ((to - from).num_milliseconds() as f64 / MILLIS_PER_DAY).max(0.0)
}
