use crate::models::titan::Titan;

/// Older or low-level languages. Presence of any one is a yes/no signal.
pub const LEGACY_LANGUAGES: &[&str] = &["Assembly", "COBOL", "Fortran", "C", "Vim Script", "Shell"];

/// Statically typed languages favoured for safe, long-lived systems.
pub const DEFENSIVE_LANGUAGES: &[&str] = &["Go", "Rust", "Java", "C++", "TypeScript"];

/// Functional and analytical languages.
pub const CREATIVE_LANGUAGES: &[&str] = &["Haskell", "Scala", "Clojure", "Elixir", "R", "MATLAB"];

/// Titans a language leans towards, with a weight in `(0, 1]`.
///
/// Names match GitHub's primary-language labels exactly. Unknown
/// languages have no affinity.
pub fn affinities(language: &str) -> &'static [(Titan, f64)] {
    use Titan::*;

    match language {
        "Go" => &[(Armored, 0.8), (Cart, 0.3)],
        "Rust" => &[(Armored, 0.9), (Beast, 0.2)],
        "Assembly" => &[(Beast, 0.9)],
        "COBOL" => &[(Beast, 1.0)],
        "Fortran" => &[(Beast, 0.8)],
        "JavaScript" => &[(Shifter, 0.6), (Vanguard, 0.4)],
        "TypeScript" => &[(Shifter, 0.7), (Armored, 0.3)],
        "Python" => &[(Shifter, 0.7), (Warhammer, 0.3)],
        "Java" => &[(Cart, 0.7), (Founder, 0.3)],
        "C++" => &[(Colossal, 0.6), (Armored, 0.4)],
        "C" => &[(Colossal, 0.7), (Beast, 0.3)],
        "PHP" => &[(Cart, 0.6), (Shifter, 0.4)],
        "Ruby" => &[(Shifter, 0.5), (Warhammer, 0.5)],
        "Swift" => &[(Jaw, 0.7), (Shifter, 0.3)],
        "Kotlin" => &[(Jaw, 0.6), (Shifter, 0.4)],
        "Scala" => &[(Warhammer, 0.8), (Beast, 0.2)],
        "Haskell" => &[(Warhammer, 0.9), (Beast, 0.1)],
        "Clojure" => &[(Warhammer, 0.8), (Beast, 0.2)],
        "Elixir" => &[(Warhammer, 0.7), (Shifter, 0.3)],
        "Shell" => &[(Beast, 0.6), (Cart, 0.4)],
        "Vim Script" => &[(Beast, 0.8)],
        "Lua" => &[(Warhammer, 0.6), (Jaw, 0.4)],
        "R" => &[(Warhammer, 0.5), (Beast, 0.5)],
        "MATLAB" => &[(Warhammer, 0.6), (Beast, 0.4)],
        "Dart" => &[(Jaw, 0.8), (Shifter, 0.2)],
        "HTML" => &[(Shifter, 0.4), (Jaw, 0.6)],
        "CSS" => &[(Shifter, 0.5), (Warhammer, 0.5)],
        _ => &[],
    }
}

/// Affinity weight of `language` for `titan`, if the table defines one.
pub fn affinity_weight(language: &str, titan: Titan) -> Option<f64> {
    affinities(language)
        .iter()
        .find(|(t, _)| *t == titan)
        .map(|(_, weight)| *weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affinity_lookup() {
        assert_eq!(affinity_weight("Rust", Titan::Armored), Some(0.9));
        assert_eq!(affinity_weight("COBOL", Titan::Beast), Some(1.0));
        assert_eq!(affinity_weight("Rust", Titan::Jaw), None);
        assert!(affinities("Brainfuck").is_empty());
    }

    #[test]
    fn test_affinity_weights_are_in_range() {
        let languages = LEGACY_LANGUAGES
            .iter()
            .chain(DEFENSIVE_LANGUAGES)
            .chain(CREATIVE_LANGUAGES)
            .chain(&[
                "JavaScript",
                "Python",
                "PHP",
                "Ruby",
                "Swift",
                "Kotlin",
                "Lua",
                "Dart",
                "HTML",
                "CSS",
            ]);

        for language in languages {
            let table = affinities(language);
            assert!(!table.is_empty(), "{} has no affinity entry", language);
            for (_, weight) in table {
                assert!(*weight > 0.0 && *weight <= 1.0);
            }
        }
    }
}
