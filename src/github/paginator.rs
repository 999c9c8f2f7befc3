use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::error::Result;
use crate::github::client::check_response;

pub struct Paginator<'a> {
    client: &'a Client,
    max_pages: u32,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client, max_pages: u32) -> Self {
        Self {
            client,
            max_pages: max_pages.max(1),
        }
    }

    /// Follow `rel="next"` links until the last page or `max_pages`.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
        login: &str,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let url = page_url(base_url, per_page, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;
            let response = check_response(response, login).await?;

            let has_next = has_next_page(response.headers());

            let items: Vec<T> = response.json().await?;
            let items_count = items.len();
            all_items.extend(items);

            if !has_next || items_count < per_page as usize {
                break;
            }

            if page >= self.max_pages {
                tracing::warn!(
                    "Stopping after {} pages, {} items fetched so far",
                    page,
                    all_items.len()
                );
                break;
            }

            page += 1;
        }

        Ok(all_items)
    }
}

fn page_url(base_url: &str, per_page: u32, page: u32) -> String {
    let separator = if base_url.contains('?') { "&" } else { "?" };
    format!("{}{}per_page={}&page={}", base_url, separator, per_page, page)
}

fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get("link")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("rel=\"next\""))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_page_url_separator() {
        assert_eq!(
            page_url("https://api.github.com/users/eren/repos", 100, 1),
            "https://api.github.com/users/eren/repos?per_page=100&page=1"
        );
        assert_eq!(
            page_url("https://api.github.com/users/eren/repos?sort=updated", 100, 3),
            "https://api.github.com/users/eren/repos?sort=updated&per_page=100&page=3"
        );
    }

    #[test]
    fn test_link_header_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_next_page(&headers));

        headers.insert(
            "link",
            HeaderValue::from_static(
                "<https://api.github.com/user/1/repos?page=2>; rel=\"next\", \
                 <https://api.github.com/user/1/repos?page=4>; rel=\"last\"",
            ),
        );
        assert!(has_next_page(&headers));

        headers.insert(
            "link",
            HeaderValue::from_static("<https://api.github.com/user/1/repos?page=1>; rel=\"prev\""),
        );
        assert!(!has_next_page(&headers));
    }
}
