//! Text rendering of an analysis for the three output regions:
//! found-skills summary, missing-skills summary and the study roadmap.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, RoadmapBlock};

pub const EMPTY_SUMMARY: &str = "None";
pub const NO_ROADMAP: &str = "No roadmap required 🎉";

/// The three display regions, pre-rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedReport {
    pub found_summary: String,
    pub missing_summary: String,
    pub roadmap: String,
}

impl RenderedReport {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            found_summary: found_summary(result),
            missing_summary: missing_summary(result),
            roadmap: roadmap_section(result),
        }
    }
}

pub fn found_summary(result: &AnalysisResult) -> String {
    join_or_none(&result.found_skills)
}

pub fn missing_summary(result: &AnalysisResult) -> String {
    join_or_none(&result.missing_skills)
}

pub fn roadmap_section(result: &AnalysisResult) -> String {
    if result.roadmap.is_empty() {
        return NO_ROADMAP.to_string();
    }
    result
        .roadmap
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Full plain-text report with headings.
pub fn render_report(result: &AnalysisResult) -> String {
    format!(
        "Skills from Syllabus:\n{}\n\nMissing Skills:\n{}\n\nStudy & Learning Roadmap\n{}\n",
        found_summary(result),
        missing_summary(result),
        roadmap_section(result)
    )
}

fn render_block(block: &RoadmapBlock) -> String {
    format!(
        "Skill: {}\nTopic: {}\nCourse: {}\nMini Project: {}\nPractice: {}",
        block.skill, block.topic, block.course, block.project, block.practice
    )
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        EMPTY_SUMMARY.to_string()
    } else {
        skills.join(", ")
    }
}
