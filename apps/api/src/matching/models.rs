//! Profile input and structured match output shared by the builder, parser and handlers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Remote => "remote",
            WorkType::Hybrid => "hybrid",
            WorkType::Onsite => "onsite",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub level: Option<String>,
    pub field: Option<String>,
    pub institution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub role: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub industry: Option<Vec<String>>,
    pub work_type: Option<WorkType>,
}

/// The candidate a job is scored against. Owned by the caller, never mutated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    pub education: Option<Education>,
    #[serde(default)]
    pub preferences: Preferences,
    pub languages: Option<Vec<String>>,
}

/// One job description paired with the profile it should be matched against.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    #[serde(alias = "job_description")]
    pub job_description: String,
    #[serde(alias = "user_profile")]
    pub user_profile: UserProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

pub const DEFAULT_GROWTH_POTENTIAL: &str = "Moderate growth expected";
pub const DEFAULT_LOCAL_COMPETITION: &str = "Competitive market";
pub const DEFAULT_SALARY_RANGE: &str = "Varies by experience and location";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalMarketInsights {
    pub demand_level: DemandLevel,
    pub growth_potential: String,
    pub local_competition: String,
    pub salary_range: String,
}

impl Default for LocalMarketInsights {
    fn default() -> Self {
        Self {
            demand_level: DemandLevel::Medium,
            growth_potential: DEFAULT_GROWTH_POTENTIAL.to_string(),
            local_competition: DEFAULT_LOCAL_COMPETITION.to_string(),
            salary_range: DEFAULT_SALARY_RANGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpskillingSuggestions {
    pub courses: Vec<String>,
    pub certifications: Vec<String>,
    pub resources: Vec<String>,
}

/// Structured view of one model reply. Every field is always populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResponse {
    /// 0 – 100
    pub match_score: u8,
    pub recommendations: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub local_market_insights: LocalMarketInsights,
    pub upskilling_suggestions: UpskillingSuggestions,
}
