use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::Config;
use crate::error::BoxError;

/// Fetch a page body by absolute URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, BoxError>;
}

/// `reqwest` backed fetcher. Non-2xx responses count as failures.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<HttpFetcher> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, BoxError> {
        let res = self.client.get(url).send().await?.error_for_status()?;
        let body = res.text().await?;
        Ok(body)
    }
}
