use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client, Response, StatusCode};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::source::ProfileSource;
use crate::models::{GitHubUser, Repository};

const DEFAULT_RETRY_SECS: u64 = 60;
const REPOS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
    max_pages: u32,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&format!("gittitan/{}", env!("CARGO_PKG_VERSION")))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            max_pages: config.max_pages,
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;
        let response = check_response(response, username).await?;

        Ok(response.json().await?)
    }

    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos?type=owner&sort=updated", self.base_url, username);
        let paginator = Paginator::new(&self.client, self.max_pages);
        tracing::info!("Fetching repositories for: {}", username);
        paginator.fetch_all(&url, REPOS_PER_PAGE, username).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_user(&self, login: &str) -> Result<GitHubUser> {
        self.get_user(login).await
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>> {
        self.get_user_repos(login).await
    }

    fn name(&self) -> &str {
        "github"
    }
}

/// Pass successful responses through, turn everything else into an [`Error`].
///
/// `login` is the user the request was made for.
pub(crate) async fn check_response(response: Response, login: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response.headers().clone();
    let body = response.text().await.unwrap_or_default();
    Err(error_for_status(status, &headers, login, &body))
}

/// Classify a failed GitHub response.
///
/// 404 means the user does not exist, 403 and 429 are rate limiting,
/// anything else is reported as an upstream API error.
pub(crate) fn error_for_status(
    status: StatusCode,
    headers: &header::HeaderMap,
    login: &str,
    body: &str,
) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::UserNotFound(login.to_string()),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = retry_after_secs(headers, Utc::now().timestamp());
            tracing::warn!(
                "GitHub rate limit hit while fetching {}, retry in {}s",
                login,
                retry_after
            );
            Error::RateLimited(retry_after)
        }
        _ => Error::GitHubApi(format!("Request for {} failed: {} - {}", login, status, body)),
    }
}

/// Seconds until the rate limit lifts, from `retry-after` or `x-ratelimit-reset`.
fn retry_after_secs(headers: &header::HeaderMap, now_epoch: i64) -> u64 {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i64>().ok())
    };

    if let Some(secs) = header_value("retry-after") {
        return secs.max(0) as u64;
    }

    header_value("x-ratelimit-reset")
        .map(|reset| (reset - now_epoch).max(0) as u64)
        .unwrap_or(DEFAULT_RETRY_SECS)
}
