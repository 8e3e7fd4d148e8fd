//! Dashboard summary: application counts rolled up into headline figures.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

/// Per-status application counts. Unset counts fall back to the sample figures.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ApplicationStats {
    #[serde(default = "default_applied")]
    pub applied: u32,
    #[serde(default = "default_interviews")]
    pub interviews: u32,
    #[serde(default = "default_offers")]
    pub offers: u32,
    #[serde(default = "default_rejected")]
    pub rejected: u32,
}

fn default_applied() -> u32 {
    15
}
fn default_interviews() -> u32 {
    5
}
fn default_offers() -> u32 {
    2
}
fn default_rejected() -> u32 {
    3
}

impl Default for ApplicationStats {
    fn default() -> Self {
        Self {
            applied: default_applied(),
            interviews: default_interviews(),
            offers: default_offers(),
            rejected: default_rejected(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_applications: u64,
    pub interviews: u32,
    pub offers: u32,
    /// Percentage of applications that progressed to an interview or offer.
    pub response_rate: u32,
    pub breakdown: Vec<StatusCount>,
}

pub fn summarize(stats: &ApplicationStats) -> DashboardSummary {
    // Summed in u64: four u32 counts cannot overflow it.
    let total = [stats.applied, stats.interviews, stats.offers, stats.rejected]
        .into_iter()
        .map(u64::from)
        .sum::<u64>();
    let responded = u64::from(stats.interviews) + u64::from(stats.offers);
    let response_rate = if total == 0 {
        0
    } else {
        (responded as f64 / total as f64 * 100.0).round() as u32
    };

    DashboardSummary {
        total_applications: total,
        interviews: stats.interviews,
        offers: stats.offers,
        response_rate,
        breakdown: vec![
            StatusCount {
                status: "applied",
                count: stats.applied,
            },
            StatusCount {
                status: "interviews",
                count: stats.interviews,
            },
            StatusCount {
                status: "offers",
                count: stats.offers,
            },
            StatusCount {
                status: "rejected",
                count: stats.rejected,
            },
        ],
    }
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(Query(stats): Query<ApplicationStats>) -> Json<DashboardSummary> {
    Json(summarize(&stats))
}
