use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited(_) | Error::Network(_))
    }

    /// Short message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            Error::UserNotFound(login) => format!("No GitHub user named '{}' was found", login),
            Error::RateLimited(secs) => format!(
                "GitHub API rate limit reached. Try again in about {} seconds",
                secs
            ),
            Error::GitHubApi(_) => {
                "GitHub API returned an error. Please try again later".to_string()
            }
            Error::Network(_) => {
                "Could not reach the GitHub API. Check your connection".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(Error::RateLimited(30).is_retryable());
        assert!(!Error::UserNotFound("octocat".to_string()).is_retryable());
        assert!(!Error::GitHubApi("502".to_string()).is_retryable());
    }

    #[test]
    fn test_user_message() {
        let msg = Error::UserNotFound("ghost".to_string()).user_message();
        assert!(msg.contains("ghost"));

        let msg = Error::RateLimited(120).user_message();
        assert!(msg.contains("120"));
    }
}
