use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::statistics::AnalysisStatistics;
use super::titan::ClassificationResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Size as reported by GitHub, in kilobytes.
    pub size: u64,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "private", default)]
    pub is_private: bool,
}

/// Everything produced by one run of the pipeline for a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitanReport {
    pub user: GitHubUser,
    pub statistics: AnalysisStatistics,
    pub classification: ClassificationResult,
    pub analysis_date: DateTime<Utc>,
}
