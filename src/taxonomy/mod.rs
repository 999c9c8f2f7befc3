pub mod languages;

pub use languages::{
    affinities, affinity_weight, CREATIVE_LANGUAGES, DEFENSIVE_LANGUAGES, LEGACY_LANGUAGES,
};
