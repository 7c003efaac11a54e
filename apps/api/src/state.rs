use std::sync::Arc;

use crate::analysis::SkillGapAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only analyzer over the catalog chosen at startup.
    pub analyzer: Arc<SkillGapAnalyzer>,
}
