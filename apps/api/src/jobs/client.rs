//! Job Board Client: the single point of entry for listing-API calls.
//!
//! Unsupported countries short-circuit to empty results without a network call.
//! A 429 is retried exactly once after a fixed delay; failures degrade to empty
//! results so the feed still renders.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::JobBoardConfig;
use crate::jobs::models::{
    CategoriesResponse, CountryCode, JobCategory, JobSearchResult, SearchParams, SearchResponse,
};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const RATE_LIMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum JobBoardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after one retry")]
    RateLimited,
}

#[derive(Clone)]
pub struct JobBoardClient {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
    rate_limit_delay: Duration,
}

impl JobBoardClient {
    pub fn new(config: &JobBoardConfig) -> Result<Self, JobBoardError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            rate_limit_delay: RATE_LIMIT_DELAY,
        })
    }

    /// Overrides the pause before the single rate-limit retry.
    #[cfg(test)]
    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Job categories for a country. Empty for unsupported countries or on failure.
    pub async fn get_categories(&self, country: CountryCode) -> Vec<JobCategory> {
        if !country.is_supported() {
            return Vec::new();
        }

        match self.fetch_categories(country).await {
            Ok(response) => response.results,
            Err(e) => {
                error!("Failed to load categories for {}: {e}", country.as_str());
                Vec::new()
            }
        }
    }

    /// One page of listings. Empty for unsupported countries or on failure.
    pub async fn search_jobs(&self, params: &SearchParams) -> JobSearchResult {
        if !params.country.is_supported() {
            return JobSearchResult::default();
        }

        match self.fetch_search(params).await {
            Ok(response) => {
                info!(
                    "Fetched {} of {} jobs (country={}, page={})",
                    response.results.len(),
                    response.count,
                    params.country.as_str(),
                    params.page()
                );
                JobSearchResult {
                    jobs: response.results,
                    total_jobs: response.count,
                }
            }
            Err(e) => {
                error!("Job search failed: {e}");
                JobSearchResult::default()
            }
        }
    }

    pub async fn fetch_categories(
        &self,
        country: CountryCode,
    ) -> Result<CategoriesResponse, JobBoardError> {
        let path = format!("/api/jobs/{}/categories", country.as_str());
        self.get_json(&path, Vec::new()).await
    }

    pub async fn fetch_search(&self, params: &SearchParams) -> Result<SearchResponse, JobBoardError> {
        let path = format!(
            "/api/jobs/{}/search/{}",
            params.country.as_str(),
            params.page()
        );
        self.get_json(&path, params.query()).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_query: Vec<(&'static str, String)>,
    ) -> Result<T, JobBoardError> {
        let url = format!("{}{}", self.base_url, path);
        let mut query = vec![
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
        ];
        query.extend(extra_query);

        let mut retried = false;
        loop {
            let response = self.client.get(&url).query(&query).send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if retried {
                    return Err(JobBoardError::RateLimited);
                }
                warn!(
                    "Job board rate limited, retrying once after {}ms",
                    self.rate_limit_delay.as_millis()
                );
                tokio::time::sleep(self.rate_limit_delay).await;
                retried = true;
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(JobBoardError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(response.json::<T>().await?);
        }
    }
}
