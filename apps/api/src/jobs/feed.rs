//! Feed assembly: search one page of listings, then decorate each with a match analysis.
//!
//! Analyses run concurrently and independently. A failed analysis leaves that job
//! undecorated; it never fails the page or affects its siblings.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::jobs::client::JobBoardClient;
use crate::jobs::models::{CountryCode, JobListing, SearchParams};
use crate::matching::matcher::JobMatcher;
use crate::matching::models::{JobMatchResponse, UserProfile};

/// Upper bound on match analyses in flight for one feed page.
pub const MAX_CONCURRENT_ANALYSES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => MatchBand::Strong,
            40..=69 => MatchBand::Moderate,
            _ => MatchBand::Weak,
        }
    }
}

/// A listing with its analysis merged in, the way the feed renders it.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedJob {
    #[serde(flatten)]
    pub job: JobListing,
    #[serde(flatten)]
    pub analysis: Option<JobMatchResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_band: Option<MatchBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_label: Option<String>,
}

impl EnrichedJob {
    pub fn new(job: JobListing, analysis: Option<JobMatchResponse>, country: CountryCode) -> Self {
        let match_band = analysis
            .as_ref()
            .map(|a| MatchBand::from_score(a.match_score));
        let salary_label = salary_label(&job, country);
        Self {
            job,
            analysis,
            match_band,
            salary_label,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedRequest {
    #[serde(flatten)]
    pub search: SearchParams,
    #[serde(alias = "userProfile")]
    pub user_profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    pub jobs: Vec<EnrichedJob>,
    pub total_jobs: u64,
    pub page: u32,
    pub results_per_page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Searches one page and enriches it against the profile, if one was given.
pub async fn build_feed(
    job_board: &JobBoardClient,
    matcher: &dyn JobMatcher,
    request: &FeedRequest,
) -> FeedPage {
    let search = &request.search;
    let country = search.country;
    let page = search.page();
    let results_per_page = search.results_per_page();

    if !country.is_supported() {
        return FeedPage {
            jobs: Vec::new(),
            total_jobs: 0,
            page,
            results_per_page,
            has_previous: page > 1,
            has_next: false,
            supported: false,
            notice: Some(coming_soon_notice(country)),
        };
    }

    let result = job_board.search_jobs(search).await;

    let jobs = match &request.user_profile {
        Some(profile) => enrich_jobs(result.jobs, profile, matcher, country).await,
        None => result
            .jobs
            .into_iter()
            .map(|job| EnrichedJob::new(job, None, country))
            .collect(),
    };

    FeedPage {
        has_previous: page > 1,
        has_next: jobs.len() >= results_per_page as usize,
        jobs,
        total_jobs: result.total_jobs,
        page,
        results_per_page,
        supported: true,
        notice: None,
    }
}

/// Runs one analysis per listing, at most `MAX_CONCURRENT_ANALYSES` at a time,
/// preserving input order.
pub async fn enrich_jobs(
    jobs: Vec<JobListing>,
    profile: &UserProfile,
    matcher: &dyn JobMatcher,
    country: CountryCode,
) -> Vec<EnrichedJob> {
    let analyses: Vec<_> = stream::iter(
        jobs.iter()
            .map(|job| matcher.analyze(&job.description, profile))
            .collect::<Vec<_>>(),
    )
    .buffered(MAX_CONCURRENT_ANALYSES)
    .collect()
    .await;

    let enriched: Vec<EnrichedJob> = jobs
        .into_iter()
        .zip(analyses)
        .map(|(job, analysis)| {
            let analysis = match analysis {
                Ok(a) => Some(a),
                Err(e) => {
                    warn!("Job {} left unenriched: {e}", job.id);
                    None
                }
            };
            EnrichedJob::new(job, analysis, country)
        })
        .collect();

    info!(
        "Enriched {}/{} jobs",
        enriched.iter().filter(|j| j.analysis.is_some()).count(),
        enriched.len()
    );

    enriched
}

fn coming_soon_notice(country: CountryCode) -> String {
    format!(
        "Job listings for {} are coming soon! Currently, only South Africa is supported.",
        country.display_name()
    )
}

/// "ZAR 300,000 - 450,000" when both bounds are present and non-zero.
fn salary_label(job: &JobListing, country: CountryCode) -> Option<String> {
    let min = job.salary_min.filter(|v| *v > 0.0)?;
    let max = job.salary_max.filter(|v| *v > 0.0)?;
    Some(format!(
        "{} {} - {}",
        country.currency(),
        group_thousands(min.round() as i64),
        group_thousands(max.round() as i64)
    ))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
