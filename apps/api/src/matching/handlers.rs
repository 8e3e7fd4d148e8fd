//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::models::{JobMatchRequest, JobMatchResponse};
use crate::matching::response_parser::parse_match_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseReplyRequest {
    pub text: String,
}

/// POST /api/v1/match
///
/// Scores one job description against the supplied profile.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<JobMatchResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    info!(
        "Analyzing job match ({} chars, {} skills)",
        request.job_description.len(),
        request.user_profile.skills.len()
    );

    let response = state
        .matcher
        .analyze(&request.job_description, &request.user_profile)
        .await?;

    Ok(Json(response))
}

/// POST /api/v1/match/parse
///
/// Runs the reply parser on caller-supplied text. Useful for previewing how a
/// model reply will be structured without spending a completion.
pub async fn handle_parse_reply(Json(request): Json<ParseReplyRequest>) -> Json<JobMatchResponse> {
    Json(parse_match_response(&request.text))
}
