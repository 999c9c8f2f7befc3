use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub max_pages: u32,
    pub request_timeout_secs: u64,
    pub affinity_bonus_factor: f64,
    pub affinity_cap: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            max_pages: 5,
            request_timeout_secs: 30,
            affinity_bonus_factor: ScoringConfig::DEFAULT_BONUS_FACTOR,
            affinity_cap: ScoringConfig::DEFAULT_AFFINITY_CAP,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_url = env::var("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let max_pages = env::var("GITHUB_MAX_PAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_pages);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let affinity_bonus_factor = env::var("AFFINITY_BONUS_FACTOR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.affinity_bonus_factor);

        let affinity_cap = env::var("AFFINITY_CAP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.affinity_cap);

        let config = Self {
            api_url,
            max_pages,
            request_timeout_secs,
            affinity_bonus_factor,
            affinity_cap,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_pages == 0 {
            return Err(Error::Config("GITHUB_MAX_PAGES must be at least 1".to_string()));
        }
        ScoringConfig::from(self).validate()
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub show_progress: bool,
    pub scoring: ScoringConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            show_progress: true,
            scoring: ScoringConfig::from(config),
        }
    }
}

/// Tunables for the language affinity bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Points added per repository, multiplied by the language's affinity weight.
    pub affinity_bonus_factor: f64,
    /// Upper bound on the total bonus a single titan can receive, in score points.
    pub affinity_cap: f64,
}

impl ScoringConfig {
    pub const DEFAULT_BONUS_FACTOR: f64 = 3.0;
    pub const DEFAULT_AFFINITY_CAP: f64 = 30.0;

    pub fn validate(&self) -> Result<()> {
        if !self.affinity_bonus_factor.is_finite() || self.affinity_bonus_factor < 0.0 {
            return Err(Error::Config(format!(
                "AFFINITY_BONUS_FACTOR must be a non-negative number, got {}",
                self.affinity_bonus_factor
            )));
        }
        if !(0.0..=100.0).contains(&self.affinity_cap) {
            return Err(Error::Config(format!(
                "AFFINITY_CAP must be between 0 and 100, got {}",
                self.affinity_cap
            )));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            affinity_bonus_factor: Self::DEFAULT_BONUS_FACTOR,
            affinity_cap: Self::DEFAULT_AFFINITY_CAP,
        }
    }
}

impl From<&Config> for ScoringConfig {
    fn from(config: &Config) -> Self {
        Self {
            affinity_bonus_factor: config.affinity_bonus_factor,
            affinity_cap: config.affinity_cap,
        }
    }
}
