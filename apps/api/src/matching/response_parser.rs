//! Response Parser: turns a free-form model reply into a fully populated `JobMatchResponse`.
//!
//! The reply is untrusted prose. Parsing never fails: every field falls back to a
//! default when its section is missing or malformed.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::matching::models::{
    DemandLevel, JobMatchResponse, LocalMarketInsights, UpskillingSuggestions,
    DEFAULT_GROWTH_POTENTIAL, DEFAULT_LOCAL_COMPETITION, DEFAULT_SALARY_RANGE,
};
use crate::matching::sections::{
    extract_bullets, first_sentence_containing, CERTIFICATIONS, COURSES, LOCAL_MARKET_INSIGHTS,
    RECOMMENDATIONS, RESOURCES, SKILL_GAPS, UPSKILLING, Section,
};

static MATCH_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)match score:?\s*([0-9]+)").unwrap_or_else(|e| panic!("match score regex: {e}"))
});

/// Parses the raw completion text.
pub fn parse_match_response(text: &str) -> JobMatchResponse {
    let text = normalize_line_endings(text);

    JobMatchResponse {
        match_score: extract_match_score(&text),
        recommendations: extract_recommendations(&text),
        skill_gaps: extract_skill_gaps(&text),
        local_market_insights: extract_local_market_insights(&text),
        upskilling_suggestions: extract_upskilling_suggestions(&text),
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// First ASCII digit run directly after "match score", capped at 100. Defaults to 0.
///
/// A signed value ("match score: -5") is not a score; matching moves on to the next
/// occurrence.
pub fn extract_match_score(text: &str) -> u8 {
    let Some(digits) = MATCH_SCORE.captures(text).and_then(|c| c.get(1)) else {
        return 0;
    };

    // ASCII digits only, so a parse failure is always overflow.
    digits.as_str().parse::<u64>().map_or(100, |score| score.min(100) as u8)
}

pub fn extract_recommendations(text: &str) -> Vec<String> {
    RECOMMENDATIONS
        .isolate(text)
        .map(extract_bullets)
        .unwrap_or_default()
}

pub fn extract_skill_gaps(text: &str) -> Vec<String> {
    SKILL_GAPS.isolate(text).map(extract_bullets).unwrap_or_default()
}

pub fn extract_local_market_insights(text: &str) -> LocalMarketInsights {
    let Some(section) = LOCAL_MARKET_INSIGHTS.isolate(text) else {
        return LocalMarketInsights::default();
    };

    let lowered = section.to_lowercase();
    let demand_level = if lowered.contains("high demand") {
        DemandLevel::High
    } else if lowered.contains("medium demand") {
        DemandLevel::Medium
    } else {
        DemandLevel::Low
    };

    let sentence_or = |keyword: &str, default: &str| {
        first_sentence_containing(section, keyword)
            .filter(|s| !s.is_empty())
            .unwrap_or(default)
            .to_string()
    };

    LocalMarketInsights {
        demand_level,
        growth_potential: sentence_or("growth potential", DEFAULT_GROWTH_POTENTIAL),
        local_competition: sentence_or("competition", DEFAULT_LOCAL_COMPETITION),
        salary_range: sentence_or("salary", DEFAULT_SALARY_RANGE),
    }
}

pub fn extract_upskilling_suggestions(text: &str) -> UpskillingSuggestions {
    let Some(section) = UPSKILLING.isolate(text) else {
        return UpskillingSuggestions::default();
    };

    UpskillingSuggestions {
        courses: bullets_in(&COURSES, section),
        certifications: bullets_in(&CERTIFICATIONS, section),
        resources: bullets_in(&RESOURCES, section),
    }
}

fn bullets_in(sub: &Section, section: &str) -> Vec<String> {
    sub.isolate(section).map(extract_bullets).unwrap_or_default()
}
