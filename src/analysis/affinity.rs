use std::collections::BTreeMap;

use crate::analysis::scorer::WeightedScore;
use crate::config::ScoringConfig;
use crate::models::titan::Titan;
use crate::taxonomy::affinity_weight;

pub const AFFINITY_KEY: &str = "language_affinity";

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedScore {
    pub titan: Titan,
    pub base: f64,
    pub affinity_bonus: f64,
    pub total: f64,
    pub breakdown: BTreeMap<String, f64>,
}

/// Every repository in a language with an affinity for `titan` adds
/// `weight * bonus_factor`, up to `affinity_cap` in total.
pub fn affinity_bonus(
    titan: Titan,
    language_distribution: &BTreeMap<String, u32>,
    config: &ScoringConfig,
) -> f64 {
    let bonus: f64 = language_distribution
        .iter()
        .filter_map(|(language, &count)| {
            affinity_weight(language, titan)
                .map(|weight| weight * count as f64 * config.affinity_bonus_factor)
        })
        .sum();

    // A negative or NaN cap, or a NaN factor, gives no bonus.
    bonus.max(0.0).min(config.affinity_cap.max(0.0))
}

pub fn apply_affinity(
    scores: Vec<WeightedScore>,
    language_distribution: &BTreeMap<String, u32>,
    config: &ScoringConfig,
) -> Vec<AdjustedScore> {
    scores
        .into_iter()
        .map(|weighted| {
            let base = weighted.value * 100.0;
            let bonus = affinity_bonus(weighted.titan, language_distribution, config);

            let mut breakdown = weighted.breakdown;
            if bonus > 0.0 {
                breakdown.insert(AFFINITY_KEY.to_string(), bonus);
            }

            AdjustedScore {
                titan: weighted.titan,
                base,
                affinity_bonus: bonus,
                total: (base + bonus).clamp(0.0, 100.0),
                breakdown,
            }
        })
        .collect()
}
