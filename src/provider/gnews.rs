use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::domain::{Article, Category};
use crate::errors::{NewsError, NewsResult};
use crate::provider::traits::NewsProvider;

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Both endpoints are English-only; the provider has no language parameter
/// surface beyond this.
const LANG: &str = "en";

/// Client for the GNews REST API. A 403 from either endpoint is the
/// distinguished quota signal; every other non-2xx is a generic provider
/// failure.
pub struct GnewsProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GnewsProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> NewsResult<Url> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| NewsError::InvalidUrl(e.to_string()))
    }

    async fn fetch_articles(&self, url: Url) -> NewsResult<Vec<Article>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            return Err(NewsError::QuotaExceeded);
        }
        if !status.is_success() {
            return Err(NewsError::Provider(format!("unexpected status {}", status)));
        }

        let body: ArticlesResponse = response.json().await?;
        Ok(body.articles)
    }
}

#[derive(Debug, Deserialize)]
struct ArticlesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[async_trait::async_trait]
impl NewsProvider for GnewsProvider {
    async fn top_headlines(&self, category: Category) -> NewsResult<Vec<Article>> {
        let mut url = self.endpoint("top-headlines")?;
        url.query_pairs_mut()
            .append_pair("category", category.as_str())
            .append_pair("lang", LANG)
            .append_pair("apikey", &self.api_key);

        self.fetch_articles(url).await
    }

    async fn search(&self, query: &str) -> NewsResult<Vec<Article>> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("lang", LANG)
            .append_pair("apikey", &self.api_key);

        self.fetch_articles(url).await
    }
}
