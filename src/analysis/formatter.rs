use crate::analysis::affinity::AdjustedScore;
use crate::models::titan::{CategoryScore, ClassificationResult, Titan, UserTrait};

/// Round a 0-100 score to the published integer form.
pub fn published_score(total: f64) -> u8 {
    total.clamp(0.0, 100.0).round() as u8
}

pub fn to_category_score(adjusted: AdjustedScore) -> CategoryScore {
    CategoryScore {
        titan: adjusted.titan,
        score: published_score(adjusted.total),
        breakdown: adjusted.breakdown,
    }
}

/// Package an already ranked score list into the final result.
///
/// `ranked` must be sorted best first; its head becomes the primary titan.
/// An empty list falls back to the highest-priority titan with no scores.
pub fn format_result(ranked: Vec<AdjustedScore>, traits: Vec<UserTrait>) -> ClassificationResult {
    let primary_titan = ranked.first().map(|s| s.titan).unwrap_or(Titan::ALL[0]);
    let scores: Vec<CategoryScore> = ranked.into_iter().map(to_category_score).collect();

    ClassificationResult {
        primary_titan,
        scores,
        explanation: primary_titan.profile().description.to_string(),
        traits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn adjusted(titan: Titan, total: f64) -> AdjustedScore {
        AdjustedScore {
            titan,
            base: total,
            affinity_bonus: 0.0,
            total,
            breakdown: BTreeMap::new(),
        }
    }

    #[test]
    fn test_published_score_rounding() {
        assert_eq!(published_score(0.0), 0);
        assert_eq!(published_score(49.5), 50);
        assert_eq!(published_score(69.2), 69);
        assert_eq!(published_score(100.0), 100);
        assert_eq!(published_score(140.0), 100);
        assert_eq!(published_score(-3.0), 0);
    }

    #[test]
    fn test_format_result_uses_head_as_primary() {
        let result = format_result(
            vec![adjusted(Titan::Jaw, 71.4), adjusted(Titan::Cart, 20.0)],
            vec![UserTrait::Active],
        );

        assert_eq!(result.primary_titan, Titan::Jaw);
        assert_eq!(result.explanation, Titan::Jaw.profile().description);
        assert_eq!(result.scores[0].score, 71);
        assert_eq!(result.scores[1].titan, Titan::Cart);
        assert_eq!(result.trait_labels(), vec!["active"]);
    }
}
