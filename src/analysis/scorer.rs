use std::collections::BTreeMap;

use crate::models::statistics::AnalysisStatistics;
use crate::models::titan::Titan;
use crate::taxonomy::{CREATIVE_LANGUAGES, DEFENSIVE_LANGUAGES, LEGACY_LANGUAGES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Followers,
    AccountAge,
    PublicRepos,
    LanguageCount,
    AverageRepoSize,
    MaxRepoSize,
    ContinuityPeriod,
    DefensiveLanguages,
    CreativeLanguages,
    LegacyLanguages,
    SmallRepos,
    MediumRepos,
    RecentActivity,
}

impl Signal {
    pub fn key(&self) -> &'static str {
        match self {
            Signal::Followers => "followers",
            Signal::AccountAge => "account_age",
            Signal::PublicRepos => "public_repos",
            Signal::LanguageCount => "language_count",
            Signal::AverageRepoSize => "avg_repo_size",
            Signal::MaxRepoSize => "max_repo_size",
            Signal::ContinuityPeriod => "continuity_period",
            Signal::DefensiveLanguages => "defensive_languages",
            Signal::CreativeLanguages => "creative_languages",
            Signal::LegacyLanguages => "legacy_languages",
            Signal::SmallRepos => "small_repos",
            Signal::MediumRepos => "medium_repos",
            Signal::RecentActivity => "recent_activity",
        }
    }

    /// `None` only for recent activity on an account with no public repositories.
    pub fn measure(&self, stats: &AnalysisStatistics) -> Option<f64> {
        let value = match self {
            Signal::Followers => stats.follower_count as f64,
            Signal::AccountAge => stats.account_age_years,
            Signal::PublicRepos => stats.public_repo_count as f64,
            Signal::LanguageCount => stats.language_count() as f64,
            Signal::AverageRepoSize => stats.average_repository_size,
            Signal::MaxRepoSize => stats.max_repository_size as f64,
            Signal::ContinuityPeriod => stats.continuity_period_days,
            Signal::DefensiveLanguages => stats.count_languages_in(DEFENSIVE_LANGUAGES) as f64,
            Signal::CreativeLanguages => stats.count_languages_in(CREATIVE_LANGUAGES) as f64,
            Signal::LegacyLanguages => stats.count_languages_in(LEGACY_LANGUAGES) as f64,
            Signal::SmallRepos => stats.repository_size_distribution.small as f64,
            Signal::MediumRepos => stats.repository_size_distribution.medium as f64,
            Signal::RecentActivity => return stats.days_since_last_update,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Saturate(f64),
    Presence,
    /// 1 up to `grace_days`, then linear decay to 0 over `decay_days`.
    Freshness { grace_days: f64, decay_days: f64 },
}

impl Scale {
    pub fn normalize(&self, raw: f64) -> f64 {
        let raw = raw.max(0.0);
        match *self {
            Scale::Saturate(divisor) => (raw / divisor).min(1.0),
            Scale::Presence => {
                if raw > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Scale::Freshness { grace_days, decay_days } => {
                if raw <= grace_days {
                    1.0
                } else {
                    (1.0 - (raw - grace_days) / decay_days).max(0.0)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSpec {
    pub signal: Signal,
    pub weight: f64,
    pub scale: Scale,
}

impl SignalSpec {
    pub fn evaluate(&self, stats: &AnalysisStatistics) -> f64 {
        match self.signal.measure(stats) {
            Some(raw) => self.scale.normalize(raw),
            None => 0.0,
        }
    }
}

const fn saturate(signal: Signal, weight: f64, divisor: f64) -> SignalSpec {
    SignalSpec {
        signal,
        weight,
        scale: Scale::Saturate(divisor),
    }
}

const fn presence(signal: Signal, weight: f64) -> SignalSpec {
    SignalSpec {
        signal,
        weight,
        scale: Scale::Presence,
    }
}

const fn recency(weight: f64, grace_days: f64, decay_days: f64) -> SignalSpec {
    SignalSpec {
        signal: Signal::RecentActivity,
        weight,
        scale: Scale::Freshness {
            grace_days,
            decay_days,
        },
    }
}

use Signal::*;

const FOUNDER: &[SignalSpec] = &[
    saturate(Followers, 0.12, 100.0),
    saturate(AccountAge, 0.12, 5.0),
    saturate(PublicRepos, 0.10, 50.0),
    saturate(LanguageCount, 0.10, 8.0),
    saturate(AverageRepoSize, 0.09, 10_000.0),
    saturate(ContinuityPeriod, 0.09, 1_000.0),
    saturate(DefensiveLanguages, 0.08, 2.0),
    recency(0.08, 30.0, 100.0),
];

const VANGUARD: &[SignalSpec] = &[
    recency(0.22, 7.0, 50.0),
    saturate(PublicRepos, 0.18, 20.0),
    saturate(ContinuityPeriod, 0.13, 500.0),
    saturate(LanguageCount, 0.09, 5.0),
    saturate(Followers, 0.09, 50.0),
    saturate(AverageRepoSize, 0.09, 5_000.0),
    saturate(AccountAge, 0.09, 3.0),
];

const COLOSSAL: &[SignalSpec] = &[
    saturate(MaxRepoSize, 0.30, 50_000.0),
    saturate(AverageRepoSize, 0.25, 15_000.0),
    saturate(PublicRepos, 0.15, 30.0),
    saturate(Followers, 0.10, 80.0),
    saturate(AccountAge, 0.10, 4.0),
    saturate(LanguageCount, 0.10, 6.0),
];

const ARMORED: &[SignalSpec] = &[
    saturate(DefensiveLanguages, 0.25, 3.0),
    saturate(AccountAge, 0.20, 4.0),
    saturate(ContinuityPeriod, 0.15, 500.0),
    recency(0.10, 14.0, 100.0),
    saturate(Followers, 0.10, 60.0),
    saturate(PublicRepos, 0.10, 25.0),
    saturate(LanguageCount, 0.10, 5.0),
];

const SHIFTER: &[SignalSpec] = &[
    saturate(LanguageCount, 0.25, 6.0),
    saturate(MediumRepos, 0.20, 5.0),
    recency(0.15, 30.0, 100.0),
    saturate(PublicRepos, 0.15, 15.0),
    saturate(Followers, 0.10, 40.0),
    saturate(AccountAge, 0.10, 3.0),
    saturate(ContinuityPeriod, 0.05, 500.0),
];

const BEAST: &[SignalSpec] = &[
    presence(LegacyLanguages, 0.38),
    saturate(AccountAge, 0.28, 4.0),
    saturate(ContinuityPeriod, 0.18, 500.0),
    saturate(Followers, 0.06, 70.0),
    saturate(PublicRepos, 0.05, 20.0),
    saturate(LanguageCount, 0.05, 4.0),
];

const JAW: &[SignalSpec] = &[
    saturate(SmallRepos, 0.25, 10.0),
    recency(0.25, 3.0, 20.0),
    saturate(PublicRepos, 0.20, 30.0),
    saturate(LanguageCount, 0.15, 4.0),
    saturate(Followers, 0.10, 30.0),
    saturate(AccountAge, 0.05, 2.0),
];

const WARHAMMER: &[SignalSpec] = &[
    saturate(CreativeLanguages, 0.38, 2.0),
    saturate(LanguageCount, 0.22, 5.0),
    recency(0.15, 14.0, 100.0),
    saturate(PublicRepos, 0.10, 15.0),
    saturate(Followers, 0.08, 40.0),
    saturate(AccountAge, 0.07, 3.0),
];

const CART: &[SignalSpec] = &[
    saturate(ContinuityPeriod, 0.38, 365.0),
    saturate(AccountAge, 0.28, 3.0),
    saturate(PublicRepos, 0.12, 20.0),
    recency(0.08, 30.0, 100.0),
    saturate(Followers, 0.07, 50.0),
    saturate(LanguageCount, 0.07, 4.0),
];

pub fn signal_table(titan: Titan) -> &'static [SignalSpec] {
    match titan {
        Titan::Founder => FOUNDER,
        Titan::Vanguard => VANGUARD,
        Titan::Colossal => COLOSSAL,
        Titan::Armored => ARMORED,
        Titan::Shifter => SHIFTER,
        Titan::Beast => BEAST,
        Titan::Jaw => JAW,
        Titan::Warhammer => WARHAMMER,
        Titan::Cart => CART,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedScore {
    pub titan: Titan,
    /// In `[0, 1]`.
    pub value: f64,
    /// Each signal's share of `value * 100`.
    pub breakdown: BTreeMap<String, f64>,
}

pub fn score(titan: Titan, stats: &AnalysisStatistics) -> f64 {
    score_with_breakdown(titan, stats).value
}

pub fn score_with_breakdown(titan: Titan, stats: &AnalysisStatistics) -> WeightedScore {
    let table = signal_table(titan);

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut contributions = Vec::with_capacity(table.len());

    for entry in table {
        let contribution = entry.weight * entry.evaluate(stats);
        weighted_sum += contribution;
        total_weight += entry.weight;
        contributions.push((entry.signal.key(), contribution));
    }

    if total_weight <= 0.0 {
        return WeightedScore {
            titan,
            value: 0.0,
            breakdown: BTreeMap::new(),
        };
    }

    let breakdown = contributions
        .into_iter()
        .map(|(key, contribution)| (key.to_string(), contribution / total_weight * 100.0))
        .collect();

    WeightedScore {
        titan,
        value: (weighted_sum / total_weight).clamp(0.0, 1.0),
        breakdown,
    }
}

/// In priority order.
pub fn score_all(stats: &AnalysisStatistics) -> Vec<WeightedScore> {
    Titan::ALL
        .iter()
        .map(|&titan| score_with_breakdown(titan, stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn veteran() -> AnalysisStatistics {
        let mut stats = AnalysisStatistics {
            handle: "levi".to_string(),
            follower_count: 150,
            public_repo_count: 60,
            analyzed_repository_count: 60,
            account_age_years: 6.0,
            average_repository_size: 12_000.0,
            max_repository_size: 80_000,
            days_since_last_update: Some(5.0),
            continuity_period_days: 1_200.0,
            ..Default::default()
        };
        let languages = [
            ("Rust", 10),
            ("Go", 8),
            ("Python", 8),
            ("JavaScript", 8),
            ("Ruby", 6),
            ("PHP", 5),
            ("Swift", 5),
            ("Kotlin", 5),
            ("Dart", 5),
        ];
        for (lang, count) in languages {
            stats.language_distribution.insert(lang.to_string(), count);
        }
        stats.repository_size_distribution.small = 20;
        stats.repository_size_distribution.medium = 20;
        stats.repository_size_distribution.large = 20;
        stats
    }

    #[test]
    fn test_weights_sum_to_at_most_one() {
        for titan in Titan::ALL {
            let sum: f64 = signal_table(titan).iter().map(|s| s.weight).sum();
            assert!(sum > 0.0 && sum <= 1.0 + 1e-9, "{:?} weights sum to {}", titan, sum);
        }
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let empty = AnalysisStatistics::default();
        for stats in [empty, veteran()] {
            for titan in Titan::ALL {
                let value = score(titan, &stats);
                assert!((0.0..=1.0).contains(&value), "{:?} scored {}", titan, value);
            }
        }
    }

    #[test]
    fn test_founder_saturates_for_veteran() {
        assert_eq!(score(Titan::Founder, &veteran()), 1.0);
    }

    #[test]
    fn test_freshness_scale() {
        let scale = Scale::Freshness {
            grace_days: 7.0,
            decay_days: 50.0,
        };
        assert_eq!(scale.normalize(0.0), 1.0);
        assert_eq!(scale.normalize(7.0), 1.0);
        assert!((scale.normalize(32.0) - 0.5).abs() < 1e-9);
        assert_eq!(scale.normalize(57.0), 0.0);
        assert_eq!(scale.normalize(400.0), 0.0);
    }

    #[test]
    fn test_saturate_and_presence_scales() {
        assert_eq!(Scale::Saturate(50.0).normalize(25.0), 0.5);
        assert_eq!(Scale::Saturate(50.0).normalize(500.0), 1.0);
        assert_eq!(Scale::Saturate(50.0).normalize(-3.0), 0.0);
        assert_eq!(Scale::Presence.normalize(0.0), 0.0);
        assert_eq!(Scale::Presence.normalize(2.0), 1.0);
    }

    #[test]
    fn test_no_repositories_means_no_recency() {
        let stats = AnalysisStatistics {
            follower_count: 100,
            account_age_years: 5.0,
            ..Default::default()
        };
        let founder = score_with_breakdown(Titan::Founder, &stats);
        assert_eq!(founder.breakdown["recent_activity"], 0.0);
        // Followers and account age still count.
        assert!(founder.value > 0.0);
    }

    #[test]
    fn test_breakdown_sums_to_weighted_score() {
        let stats = veteran();
        for weighted in score_all(&stats) {
            let sum: f64 = weighted.breakdown.values().sum();
            assert!(
                (sum - weighted.value * 100.0).abs() < 1e-9,
                "{:?}: breakdown {} vs score {}",
                weighted.titan,
                sum,
                weighted.value * 100.0
            );
        }
    }

    #[test]
    fn test_founder_is_monotonic_in_followers() {
        let mut stats = AnalysisStatistics {
            account_age_years: 2.0,
            public_repo_count: 10,
            days_since_last_update: Some(40.0),
            ..Default::default()
        };
        let mut previous = 0.0;
        for followers in [0, 10, 50, 99, 100, 101, 5_000] {
            stats.follower_count = followers;
            let current = score(Titan::Founder, &stats);
            assert!(current >= previous, "score dropped at {} followers", followers);
            previous = current;
        }
    }

    #[test]
    fn test_legacy_language_presence() {
        let mut stats = AnalysisStatistics::default();
        let without = score_with_breakdown(Titan::Beast, &stats);
        assert_eq!(without.breakdown["legacy_languages"], 0.0);

        stats.language_distribution.insert("COBOL".to_string(), 1);
        let with = score_with_breakdown(Titan::Beast, &stats);
        assert!((with.breakdown["legacy_languages"] - 38.0).abs() < 1e-6);
        assert!(with.value > without.value);
    }
}
