// Skill-gap analysis: keyword extraction, gap computation, roadmap selection.
// Pure and synchronous — no I/O, no state carried between calls.

pub mod analyzer;
pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod matcher;
pub mod roadmap;
pub mod upload;

use thiserror::Error;

pub use analyzer::{AnalysisResult, RoleAnalysis, SkillGapAnalyzer};
pub use matcher::MatchMode;
pub use roadmap::RoadmapBlock;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Please select a job role")]
    MissingRoleSelection,

    #[error("Unknown job role: {0}")]
    UnknownRole(String),

    #[error("Keyword '{keyword}' cannot be compiled: {reason}")]
    InvalidKeyword { keyword: String, reason: String },
}
