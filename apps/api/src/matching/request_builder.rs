//! Match-Request Builder: turns a job description and a profile into a chat-completion payload.
//!
//! Pure string templating: no validation, no I/O. Missing optional profile fields
//! render as "Not specified" / "Any"; an empty optional string or list counts as missing.

use crate::llm_client::{ChatCompletionRequest, ChatMessage};
use crate::matching::models::UserProfile;
use crate::matching::prompts::{
    ANY, MATCH_MODEL, MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM, MATCH_TEMPERATURE, NOT_SPECIFIED,
};

/// Builds the system + user message pair for one job.
pub fn build_match_request(job_description: &str, profile: &UserProfile) -> ChatCompletionRequest {
    ChatCompletionRequest {
        messages: vec![
            ChatMessage::system(MATCH_SYSTEM),
            ChatMessage::user(build_match_prompt(job_description, profile)),
        ],
        model: MATCH_MODEL.to_string(),
        temperature: MATCH_TEMPERATURE,
    }
}

fn build_match_prompt(job_description: &str, profile: &UserProfile) -> String {
    let prefs = &profile.preferences;
    let skills = profile.skills.join(", ");
    let education = describe_education(profile);
    let languages = join_or(profile.languages.as_deref(), NOT_SPECIFIED);
    let industry = join_or(prefs.industry.as_deref(), ANY);

    fill_template(
        MATCH_PROMPT_TEMPLATE,
        &[
            ("job_description", job_description),
            ("skills", skills.as_str()),
            ("experience", profile.experience.as_str()),
            ("education", education.as_str()),
            ("languages", languages.as_str()),
            ("role", or_default(prefs.role.as_deref(), ANY)),
            ("location", or_default(prefs.location.as_deref(), ANY)),
            ("salary", or_default(prefs.salary.as_deref(), NOT_SPECIFIED)),
            ("industry", industry.as_str()),
            (
                "work_type",
                prefs.work_type.map(|w| w.as_str()).unwrap_or(ANY),
            ),
        ],
    )
}

/// Single left-to-right pass over the template. Substituted values are copied
/// verbatim and never rescanned; unknown `{names}` are left as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// "<level> in <field>", plus " from <institution>" when known.
fn describe_education(profile: &UserProfile) -> String {
    let education = profile.education.as_ref();
    let level = or_default(education.and_then(|e| e.level.as_deref()), NOT_SPECIFIED);
    let field = or_default(education.and_then(|e| e.field.as_deref()), NOT_SPECIFIED);

    match education
        .and_then(|e| e.institution.as_deref())
        .filter(|i| !i.is_empty())
    {
        Some(institution) => format!("{level} in {field} from {institution}"),
        None => format!("{level} in {field}"),
    }
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(default)
}

fn join_or(values: Option<&[String]>, default: &str) -> String {
    match values {
        Some(v) if !v.is_empty() => v.join(", "),
        _ => default.to_string(),
    }
}
