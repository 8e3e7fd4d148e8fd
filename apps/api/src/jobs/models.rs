//! Job-listing API shapes and the country allow-list.

use serde::{Deserialize, Serialize};

/// Countries offered in the feed. Only those in `SUPPORTED_COUNTRIES` are backed by listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryCode {
    Ke,
    Za,
    Ng,
    Gh,
}

/// The listing API only covers South Africa among African markets.
pub const SUPPORTED_COUNTRIES: &[CountryCode] = &[CountryCode::Za];

impl CountryCode {
    pub const ALL: [CountryCode; 4] = [
        CountryCode::Ke,
        CountryCode::Za,
        CountryCode::Ng,
        CountryCode::Gh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Ke => "ke",
            CountryCode::Za => "za",
            CountryCode::Ng => "ng",
            CountryCode::Gh => "gh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CountryCode::Ke => "Kenya",
            CountryCode::Za => "South Africa",
            CountryCode::Ng => "Nigeria",
            CountryCode::Gh => "Ghana",
        }
    }

    pub fn currency(&self) -> &'static str {
        match self {
            CountryCode::Ke => "KES",
            CountryCode::Za => "ZAR",
            CountryCode::Ng => "NGN",
            CountryCode::Gh => "GHS",
        }
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_COUNTRIES.contains(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryInfo {
    pub code: CountryCode,
    pub name: &'static str,
    pub currency: &'static str,
    pub supported: bool,
}

impl From<CountryCode> for CountryInfo {
    fn from(code: CountryCode) -> Self {
        Self {
            code,
            name: code.display_name(),
            currency: code.currency(),
            supported: code.is_supported(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLocation {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub area: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobCategory {
    pub tag: String,
    pub label: String,
}

/// A single listing as returned by the job board. Not owned by the matching core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub location: JobLocation,
    #[serde(default)]
    pub redirect_url: String,
    #[serde(default)]
    pub company: Company,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub category: JobCategory,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<JobListing>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub results: Vec<JobCategory>,
}

pub const DEFAULT_RESULTS_PER_PAGE: u32 = 10;
/// Each listing on a page costs one completion when the feed is enriched.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;
pub const DEFAULT_MAX_DAYS_OLD: u32 = 30;
pub const DEFAULT_SORT_BY: &str = "date";

/// Feed search filters. Unset fields fall back to the job board defaults used by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub country: CountryCode,
    pub what: Option<String>,
    #[serde(rename = "where", alias = "location")]
    pub location: Option<String>,
    pub category: Option<String>,
    pub max_days_old: Option<u32>,
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub results_per_page: Option<u32>,
}

impl SearchParams {
    #[cfg(test)]
    pub fn new(country: CountryCode) -> Self {
        Self {
            country,
            what: None,
            location: None,
            category: None,
            max_days_old: None,
            sort_by: None,
            page: None,
            results_per_page: None,
        }
    }

    /// 1-based; zero is treated as the first page.
    pub fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// Defaults to 10, capped at `MAX_RESULTS_PER_PAGE`.
    pub fn results_per_page(&self) -> u32 {
        self.results_per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_RESULTS_PER_PAGE)
            .min(MAX_RESULTS_PER_PAGE)
    }

    /// Query string sent alongside the credentials.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("results_per_page", self.results_per_page().to_string()),
            ("what", self.what.clone().unwrap_or_default()),
            ("where", self.location.clone().unwrap_or_default()),
            ("category", self.category.clone().unwrap_or_default()),
            (
                "max_days_old",
                self.max_days_old
                    .filter(|d| *d > 0)
                    .unwrap_or(DEFAULT_MAX_DAYS_OLD)
                    .to_string(),
            ),
            (
                "sort_by",
                self.sort_by
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| DEFAULT_SORT_BY.to_string()),
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobSearchResult {
    pub jobs: Vec<JobListing>,
    pub total_jobs: u64,
}
