// All LLM prompt constants for job matching.
// The response parser depends on the section names requested here.

/// Model used for match analysis.
pub const MATCH_MODEL: &str = "grok-2-latest";

pub const MATCH_TEMPERATURE: f32 = 0.7;

/// System prompt establishing the advisor's regional framing.
pub const MATCH_SYSTEM: &str = "You are an AI career advisor specialized in the African job market, \
    particularly for youth employment. \
    Consider local market conditions, cultural context, and development opportunities in Kenya and broader Africa.\n\
    Provide practical, actionable advice that takes into account:\n\
    - Local industry trends and growth sectors\n\
    - Skills that are in high demand locally\n\
    - Opportunities for remote work with international companies\n\
    - Local startup ecosystem and entrepreneurship opportunities\n\
    - Relevant training and upskilling programs available in the region";

/// Match analysis prompt template.
/// Placeholders: {job_description}, {skills}, {experience}, {education}, {languages},
///               {role}, {location}, {salary}, {industry}, {work_type}.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Analyze this job opportunity for a candidate in the African job market:

Job Description:
{job_description}

Candidate Profile:
- Skills: {skills}
- Experience: {experience}
- Education: {education}
- Languages: {languages}

Preferences:
- Role: {role}
- Location: {location}
- Salary: {salary}
- Industry Interests: {industry}
- Work Type: {work_type}

Please provide:
1. A match score (0-100)
2. Specific recommendations for the candidate
3. Skill gaps that should be addressed
4. Local market insights (demand, growth potential, competition)
5. Upskilling suggestions (courses, certifications, resources)"#;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const ANY: &str = "Any";
