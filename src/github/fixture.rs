use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::github::source::ProfileSource;
use crate::models::{GitHubUser, Repository};

/// A user and their repositories, in the same shape the GitHub API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureData {
    pub user: GitHubUser,
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

/// Serves a single user from a JSON file instead of the network.
pub struct FixtureSource {
    data: FixtureData,
}

impl FixtureSource {
    pub fn new(data: FixtureData) -> Self {
        Self { data }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading fixture from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn login(&self) -> &str {
        &self.data.user.login
    }

    fn ensure_login(&self, login: &str) -> Result<()> {
        if self.data.user.login.eq_ignore_ascii_case(login) {
            Ok(())
        } else {
            Err(Error::UserNotFound(login.to_string()))
        }
    }
}

#[async_trait]
impl ProfileSource for FixtureSource {
    async fn fetch_user(&self, login: &str) -> Result<GitHubUser> {
        self.ensure_login(login)?;
        Ok(self.data.user.clone())
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>> {
        self.ensure_login(login)?;
        Ok(self.data.repositories.clone())
    }

    fn name(&self) -> &str {
        "fixture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"{
        "user": {
            "login": "Reiner", "followers": 12, "public_repos": 2,
            "name": null, "bio": null, "created_at": "2019-03-01T00:00:00Z"
        },
        "repositories": [
            {
                "name": "wall", "size": 4200, "language": "Rust", "private": false,
                "created_at": "2019-04-01T00:00:00Z", "updated_at": "2024-12-01T00:00:00Z",
                "pushed_at": null
            },
            {
                "name": "secret", "size": 10, "language": "Go", "private": true,
                "created_at": "2020-04-01T00:00:00Z", "updated_at": "2024-11-01T00:00:00Z",
                "pushed_at": null
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_fixture_serves_matching_login() {
        let source = FixtureSource::from_json(FIXTURE).unwrap();

        let user = source.fetch_user("reiner").await.unwrap();
        assert_eq!(user.login, "Reiner");
        assert_eq!(user.followers, 12);

        let repos = source.fetch_repositories("Reiner").await.unwrap();
        assert_eq!(repos.len(), 2);
        assert!(repos[1].is_private);
    }

    #[tokio::test]
    async fn test_fixture_rejects_other_logins() {
        let source = FixtureSource::from_json(FIXTURE).unwrap();
        let err = source.fetch_user("bertholdt").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound(_)));
    }

    #[test]
    fn test_fixture_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let source = FixtureSource::from_path(file.path()).unwrap();
        assert_eq!(source.login(), "Reiner");
        assert_eq!(source.name(), "fixture");
    }

    #[test]
    fn test_malformed_fixture() {
        assert!(matches!(
            FixtureSource::from_json("{\"user\": 3}"),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            FixtureSource::from_path("/definitely/not/here.json"),
            Err(Error::Io(_))
        ));
    }
}
