use anyhow::{Context, Result};

const DEFAULT_XAI_BASE_URL: &str = "https://api.x.ai/v1";
const DEFAULT_ADZUNA_BASE_URL: &str = "https://api.adzuna.com/v1";

/// Connection settings for the chat-completion provider.
/// Handed to `LlmClient::new` so nothing below `main` reads the environment.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub is_dev: bool,
}

/// Credentials for the job-listing API.
#[derive(Debug, Clone)]
pub struct JobBoardConfig {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub job_board: JobBoardConfig,
    pub is_dev: bool,
    pub port: u16,
    pub rust_log: String,
    /// Browser origins allowed by CORS. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let is_dev = is_dev_env(std::env::var("APP_ENV").ok().as_deref());
        let default_level = if is_dev { "debug" } else { "info" };

        Ok(Config {
            llm: LlmConfig {
                api_key: require_env("XAI_API_KEY")?,
                base_url: env_or("XAI_BASE_URL", DEFAULT_XAI_BASE_URL),
                is_dev,
            },
            job_board: JobBoardConfig {
                app_id: require_env("ADZUNA_APP_ID")?,
                app_key: require_env("ADZUNA_APP_KEY")?,
                base_url: env_or("ADZUNA_BASE_URL", DEFAULT_ADZUNA_BASE_URL),
            },
            is_dev,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", default_level),
            cors_origins: parse_origins(std::env::var("CORS_ALLOWED_ORIGINS").ok().as_deref()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Comma-separated origins; blanks and trailing slashes are dropped.
fn parse_origins(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// `APP_ENV=development` (or `dev`) switches on dev mode. Anything else is production.
fn is_dev_env(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("development") | Some("dev")
    )
}
