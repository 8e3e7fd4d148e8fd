//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::jobs::feed::{build_feed, FeedPage, FeedRequest};
use crate::jobs::models::{CategoriesResponse, CountryCode, CountryInfo};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CountryQuery {
    pub country: CountryCode,
}

/// GET /api/v1/countries
pub async fn handle_list_countries() -> Json<Vec<CountryInfo>> {
    Json(CountryCode::ALL.into_iter().map(CountryInfo::from).collect())
}

/// GET /api/v1/jobs/categories?country=za
///
/// Unsupported countries and upstream failures both yield an empty list.
pub async fn handle_get_categories(
    State(state): State<AppState>,
    Query(params): Query<CountryQuery>,
) -> Json<CategoriesResponse> {
    let results = state.job_board.get_categories(params.country).await;
    Json(CategoriesResponse { results })
}

/// POST /api/v1/jobs/feed
///
/// One page of listings, each decorated with a match analysis when a profile is supplied.
pub async fn handle_feed(
    State(state): State<AppState>,
    Json(request): Json<FeedRequest>,
) -> Json<FeedPage> {
    Json(build_feed(&state.job_board, state.matcher.as_ref(), &request).await)
}
