//! Text segmentation over free-form model replies.
//!
//! A section starts right after its label and runs until the first of: the label
//! that follows it in reply order, a blank line, or the end of the text. Labels
//! are matched case-insensitively and only their first occurrence counts.

use std::sync::LazyLock;

use regex::Regex;

/// A labelled region of the reply.
pub struct Section {
    label: Regex,
    end: Regex,
}

impl Section {
    /// `label` is a regex fragment for the heading. `next` is the heading that closes
    /// this section, or `None` when only a blank line or end of text does.
    fn new(label: &str, next: Option<&str>) -> Self {
        let end = match next {
            Some(next) => format!(r"(?i){next}|\n\n"),
            None => r"\n\n".to_string(),
        };
        Self {
            label: compile(&format!(r"(?i){label}:?")),
            end: compile(&end),
        }
    }

    /// Returns the text between this section's label and its terminator,
    /// or `None` if the label never appears.
    pub fn isolate<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = self.label.find(text)?.end();
        let rest = &text[start..];
        let stop = self.end.find(rest).map_or(rest.len(), |m| m.start());
        Some(&rest[..stop])
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid section pattern {pattern:?}: {e}"))
}

pub static RECOMMENDATIONS: LazyLock<Section> =
    LazyLock::new(|| Section::new("recommendations?", Some("skill gaps")));
pub static SKILL_GAPS: LazyLock<Section> =
    LazyLock::new(|| Section::new("skill gaps", Some("local market insights")));
pub static LOCAL_MARKET_INSIGHTS: LazyLock<Section> =
    LazyLock::new(|| Section::new("local market insights", Some("upskilling")));
pub static UPSKILLING: LazyLock<Section> =
    LazyLock::new(|| Section::new("upskilling(?: suggestions)?", None));

// Nested inside UPSKILLING.
pub static COURSES: LazyLock<Section> =
    LazyLock::new(|| Section::new("courses", Some("certifications")));
pub static CERTIFICATIONS: LazyLock<Section> =
    LazyLock::new(|| Section::new("certifications", Some("resources")));
pub static RESOURCES: LazyLock<Section> = LazyLock::new(|| Section::new("resources", None));

/// Keeps lines starting with `-` or `•`, stripped of the marker and following
/// whitespace. Anything else (prose, numbered items) is dropped; order is preserved.
pub fn extract_bullets(section: &str) -> Vec<String> {
    section
        .split('\n')
        .map(str::trim)
        .filter_map(|line| {
            line.strip_prefix('-')
                .or_else(|| line.strip_prefix('•'))
                .map(|item| item.trim_start().to_string())
        })
        .collect()
}

/// First sentence (split on runs of `.`, `!`, `?`) whose lowercase form contains
/// `keyword`, trimmed and in its original case.
pub fn first_sentence_containing<'a>(section: &'a str, keyword: &str) -> Option<&'a str> {
    section
        .split(['.', '!', '?'])
        .filter(|s| !s.is_empty())
        .find(|s| s.to_lowercase().contains(keyword))
        .map(str::trim)
}
