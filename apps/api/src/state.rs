use std::sync::Arc;

use crate::config::Config;
use crate::jobs::client::JobBoardClient;
use crate::matching::matcher::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub job_board: JobBoardClient,
    /// Pluggable matcher. Default: LlmJobMatcher.
    pub matcher: Arc<dyn JobMatcher>,
}
