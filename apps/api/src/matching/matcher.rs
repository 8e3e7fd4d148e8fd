//! Job Matcher: pluggable, trait-based seam between callers and the match backend.
//!
//! Default: `LlmJobMatcher` (build prompt → chat completion → parse reply).
//! `AppState` holds an `Arc<dyn JobMatcher>` so feed enrichment can be tested without a network.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::matching::models::{JobMatchResponse, UserProfile};
use crate::matching::request_builder::build_match_request;
use crate::matching::response_parser::parse_match_response;

#[async_trait]
pub trait JobMatcher: Send + Sync {
    async fn analyze(
        &self,
        job_description: &str,
        profile: &UserProfile,
    ) -> Result<JobMatchResponse, AppError>;
}

/// Scores a job by asking the language model and parsing its prose reply.
pub struct LlmJobMatcher {
    llm: LlmClient,
}

impl LlmJobMatcher {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl JobMatcher for LlmJobMatcher {
    async fn analyze(
        &self,
        job_description: &str,
        profile: &UserProfile,
    ) -> Result<JobMatchResponse, AppError> {
        let request = build_match_request(job_description, profile);

        let reply = self
            .llm
            .complete(&request)
            .await
            .map_err(|e| AppError::Llm(format!("Job match analysis failed: {e}")))?;

        let parsed = parse_match_response(&reply);
        debug!(
            "Match parsed: score={}, recommendations={}, skill_gaps={}",
            parsed.match_score,
            parsed.recommendations.len(),
            parsed.skill_gaps.len()
        );

        Ok(parsed)
    }
}
