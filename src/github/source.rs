use async_trait::async_trait;
use crate::error::Result;
use crate::models::{GitHubUser, Repository};

/// Where user and repository records come from.
///
/// The classification core never talks to a source directly; the pipeline
/// fetches through one and hands the records to the aggregator.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_user(&self, login: &str) -> Result<GitHubUser>;
    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>>;
    fn name(&self) -> &str;
}
