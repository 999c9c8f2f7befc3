use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// The nine Titan archetypes.
///
/// Declaration order is the tie-break priority: when two titans end up
/// with the same published score, the one declared first ranks higher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Titan {
    Founder,
    Vanguard,
    Colossal,
    Armored,
    Shifter,
    Beast,
    Jaw,
    Warhammer,
    Cart,
}

impl Titan {
    pub const ALL: [Titan; 9] = [
        Titan::Founder,
        Titan::Vanguard,
        Titan::Colossal,
        Titan::Armored,
        Titan::Shifter,
        Titan::Beast,
        Titan::Jaw,
        Titan::Warhammer,
        Titan::Cart,
    ];

    /// Position in the tie-break order, 0 being the highest priority.
    pub fn priority(&self) -> usize {
        *self as usize
    }

    pub fn profile(&self) -> &'static TitanProfile {
        &TITAN_PROFILES[self.priority()]
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }
}

impl std::fmt::Display for Titan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static presentation data for a titan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitanProfile {
    pub titan: Titan,
    pub name: &'static str,
    pub native_name: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    pub color: &'static str,
    pub icon: &'static str,
}

/// Indexed by `Titan::priority()`.
pub static TITAN_PROFILES: [TitanProfile; 9] = [
    TitanProfile {
        titan: Titan::Founder,
        name: "Founding Titan",
        native_name: "始祖の巨人",
        description: "A well-rounded developer backed by a large following. \
            You lead by example and have the pull to guide a whole community.",
        traits: &["Balanced", "Leadership", "Many followers", "Strong influence"],
        color: "#FFD700",
        icon: "👑",
    },
    TitanProfile {
        titan: Titan::Vanguard,
        name: "Attack Titan",
        native_name: "進撃の巨人",
        description: "A passionate developer who never stops moving forward. \
            Steady, recent activity shows you keep taking on new challenges.",
        traits: &["High activity", "Continuous development", "Bold", "Passionate"],
        color: "#DC143C",
        icon: "⚡",
    },
    TitanProfile {
        titan: Titan::Colossal,
        name: "Colossal Titan",
        native_name: "超大型巨人",
        description: "A heavyweight who takes on large-scale projects. \
            Your sheer output leaves a visible mark on the ecosystem.",
        traits: &[
            "Large-scale development",
            "Deep technical skill",
            "Overwhelming presence",
            "Wide impact",
        ],
        color: "#8B4513",
        icon: "🔥",
    },
    TitanProfile {
        titan: Titan::Armored,
        name: "Armored Titan",
        native_name: "鎧の巨人",
        description: "A defensive specialist who prefers solid, dependable technology. \
            Safety and correctness come first in everything you build.",
        traits: &["Steady", "Safety first", "Defensive", "Reliable"],
        color: "#708090",
        icon: "🛡️",
    },
    TitanProfile {
        titan: Titan::Shifter,
        name: "Female Titan",
        native_name: "女型の巨人",
        description: "A versatile developer at home across many stacks. \
            Flexibility and adaptability let you handle whatever comes up.",
        traits: &["Diversity", "Flexibility", "Adaptability", "All-rounder"],
        color: "#FF69B4",
        icon: "💎",
    },
    TitanProfile {
        titan: Titan::Beast,
        name: "Beast Titan",
        native_name: "獣の巨人",
        description: "A sage of older technologies and niche fields. \
            Deep specialist knowledge gives you an approach nobody else has.",
        traits: &["Expertise", "Legacy technology", "Unique approach", "Wisdom"],
        color: "#8B4513",
        icon: "🧠",
    },
    TitanProfile {
        titan: Titan::Jaw,
        name: "Jaw Titan",
        native_name: "顎の巨人",
        description: "A nimble developer with a light, fast style. \
            You ship many small projects and get results quickly.",
        traits: &["Mobility", "Speed", "Nimble", "Efficient"],
        color: "#32CD32",
        icon: "⚡",
    },
    TitanProfile {
        titan: Titan::Warhammer,
        name: "War Hammer Titan",
        native_name: "戦槌の巨人",
        description: "A creative and original developer. \
            Unusual, inventive projects are how you surprise the people around you.",
        traits: &["Creativity", "Originality", "Innovative", "Unique"],
        color: "#9932CC",
        icon: "🎨",
    },
    TitanProfile {
        titan: Titan::Cart,
        name: "Cart Titan",
        native_name: "車力の巨人",
        description: "A developer built for sustained, long-running work. \
            You show your real strength on projects that span years.",
        traits: &["Continuity", "Endurance", "Long-term development", "Stability"],
        color: "#2E8B57",
        icon: "🚀",
    },
];

/// Final score for one titan, as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub titan: Titan,
    /// Integer score in `0..=100`.
    pub score: u8,
    /// Contribution of each factor on the 0-100 scale. Display only.
    pub breakdown: BTreeMap<String, f64>,
}

/// Qualitative tags derived straight from the statistics, independent of scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserTrait {
    #[serde(rename = "influential")]
    Influential,
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "experienced")]
    Experienced,
    #[serde(rename = "polyglot")]
    Polyglot,
    #[serde(rename = "builds large projects")]
    LargeProjects,
    #[serde(rename = "sustains long-term work")]
    LongTermWork,
}

impl UserTrait {
    pub fn label(&self) -> &'static str {
        match self {
            UserTrait::Influential => "influential",
            UserTrait::Active => "active",
            UserTrait::Experienced => "experienced",
            UserTrait::Polyglot => "polyglot",
            UserTrait::LargeProjects => "builds large projects",
            UserTrait::LongTermWork => "sustains long-term work",
        }
    }
}

impl std::fmt::Display for UserTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub primary_titan: Titan,
    /// All nine titans, highest score first.
    pub scores: Vec<CategoryScore>,
    pub explanation: String,
    pub traits: Vec<UserTrait>,
}

impl ClassificationResult {
    pub fn score_for(&self, titan: Titan) -> Option<&CategoryScore> {
        self.scores.iter().find(|s| s.titan == titan)
    }

    pub fn has_trait(&self, user_trait: UserTrait) -> bool {
        self.traits.contains(&user_trait)
    }

    pub fn trait_labels(&self) -> Vec<&'static str> {
        self.traits.iter().map(|t| t.label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_line_up_with_titans() {
        for titan in Titan::ALL {
            assert_eq!(titan.profile().titan, titan);
            assert!(!titan.profile().description.is_empty());
            assert_eq!(titan.profile().traits.len(), 4);
        }
    }

    #[test]
    fn test_priority_follows_declaration_order() {
        assert_eq!(Titan::Founder.priority(), 0);
        assert_eq!(Titan::Cart.priority(), 8);
        assert!(Titan::Vanguard < Titan::Jaw);
    }

    #[test]
    fn test_trait_serializes_as_label() {
        let json = serde_json::to_string(&UserTrait::LargeProjects).unwrap();
        assert_eq!(json, "\"builds large projects\"");
        assert_eq!(UserTrait::LongTermWork.to_string(), "sustains long-term work");
    }
}
