//! SkillGapAnalyzer — syllabus text + role in, found/missing skills and roadmap out.
//!
//! One pass per call:
//! 1. lowercase the syllabus once and scan it for every catalog keyword
//! 2. subtract the found skills from the role's requirements (requirement order)
//! 3. pick roadmap blocks for missing skills that have an entry
//!
//! The catalog is injected, so tests and deployments can substitute their own tables.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::extractor::{compile_keywords, extract_found_skills, CompiledKeyword};
use crate::analysis::gap::{compute_matched_skills, compute_missing_skills};
use crate::analysis::matcher::MatchMode;
use crate::analysis::roadmap::{build_roadmap_blocks, RoadmapBlock};
use crate::analysis::AnalysisError;
use crate::catalog::{RoleId, SkillCatalog};

/// Outcome of analyzing one syllabus against one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub role: RoleId,
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub roadmap: Vec<RoadmapBlock>,
}

/// Per-role breakdown used when no single role is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAnalysis {
    pub role: RoleId,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub roadmap: Vec<RoadmapBlock>,
}

#[derive(Debug, Clone)]
pub struct SkillGapAnalyzer {
    catalog: Arc<SkillCatalog>,
    keywords: Vec<CompiledKeyword>,
    mode: MatchMode,
}

impl SkillGapAnalyzer {
    pub fn new(catalog: Arc<SkillCatalog>, mode: MatchMode) -> Result<Self, AnalysisError> {
        let keywords = compile_keywords(&catalog.keywords, mode)?;
        Ok(Self {
            catalog,
            keywords,
            mode,
        })
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Analyzes `syllabus` against the requirements of `role`.
    ///
    /// An empty or whitespace-only role fails with `MissingRoleSelection` before
    /// any text is scanned.
    pub fn analyze(&self, syllabus: &str, role: &str) -> Result<AnalysisResult, AnalysisError> {
        let role = role.trim();
        let required = self.requirements_for(role)?;

        let found_skills = extract_found_skills(&self.keywords, syllabus);
        let missing_skills = compute_missing_skills(required, &found_skills);
        let roadmap = build_roadmap_blocks(&missing_skills, &self.catalog.roadmap);

        debug!(
            role,
            found = found_skills.len(),
            missing = missing_skills.len(),
            roadmap = roadmap.len(),
            "skill gap analysis complete"
        );

        Ok(AnalysisResult {
            role: RoleId::new(role),
            found_skills,
            missing_skills,
            roadmap,
        })
    }

    /// Resolves a role selection to its requirements without touching any syllabus.
    pub fn requirements_for(&self, role: &str) -> Result<&[String], AnalysisError> {
        let role = role.trim();
        if role.is_empty() {
            return Err(AnalysisError::MissingRoleSelection);
        }
        self.catalog
            .requirements(role)
            .ok_or_else(|| AnalysisError::UnknownRole(role.to_string()))
    }

    /// Scans the syllabus once and reports matched/missing skills for every role,
    /// in catalog role order.
    pub fn analyze_all_roles(&self, syllabus: &str) -> Vec<RoleAnalysis> {
        let found = extract_found_skills(&self.keywords, syllabus);

        self.catalog
            .roles
            .iter()
            .map(|(role, required)| {
                let missing = compute_missing_skills(required, &found);
                let roadmap = build_roadmap_blocks(&missing, &self.catalog.roadmap);
                RoleAnalysis {
                    role: role.clone(),
                    matched: compute_matched_skills(required, &found),
                    missing,
                    roadmap,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SkillGapAnalyzer {
        SkillGapAnalyzer::new(Arc::new(SkillCatalog::builtin()), MatchMode::Substring).unwrap()
    }

    fn roadmap_skills(result: &AnalysisResult) -> Vec<&str> {
        result.roadmap.iter().map(|b| b.skill.as_str()).collect()
    }

    #[test]
    fn test_missing_role_is_rejected() {
        let err = analyzer().analyze("We study DBMS", "").unwrap_err();
        assert_eq!(err, AnalysisError::MissingRoleSelection);
        assert_eq!(err.to_string(), "Please select a job role");
    }

    #[test]
    fn test_whitespace_role_is_missing_selection() {
        let err = analyzer().analyze("anything", "   ").unwrap_err();
        assert_eq!(err, AnalysisError::MissingRoleSelection);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = analyzer().analyze("python", "astronaut").unwrap_err();
        assert_eq!(err, AnalysisError::UnknownRole("astronaut".to_string()));
    }

    #[test]
    fn test_backend_with_dbms_and_sql() {
        let result = analyzer().analyze("We study DBMS and SQL", "backend").unwrap();
        assert_eq!(
            result.found_skills,
            vec!["Database Management", "Database Querying"]
        );
        // Database Querying is found but not a backend requirement.
        assert_eq!(
            result.missing_skills,
            vec![
                "Python Programming",
                "API Development",
                "System Design",
                "Authentication"
            ]
        );
        assert_eq!(roadmap_skills(&result), vec!["Python Programming"]);
    }

    #[test]
    fn test_web_with_html_and_css_substring_overmatch() {
        let result = analyzer().analyze("Intro to HTML and CSS", "web").unwrap();
        // "ml" occurs inside "html" under substring matching.
        assert_eq!(result.found_skills, vec!["HTML", "CSS", "ML Basics"]);
        assert_eq!(
            result.missing_skills,
            vec!["JavaScript", "Responsive Design", "Backend Basics"]
        );
        assert_eq!(
            roadmap_skills(&result),
            vec!["Responsive Design", "Backend Basics"]
        );
    }

    #[test]
    fn test_web_with_html_and_css_word_boundary() {
        let analyzer =
            SkillGapAnalyzer::new(Arc::new(SkillCatalog::builtin()), MatchMode::WordBoundary)
                .unwrap();
        let result = analyzer.analyze("Intro to HTML and CSS", "web").unwrap();
        assert_eq!(result.found_skills, vec!["HTML", "CSS"]);
        assert_eq!(
            result.missing_skills,
            vec!["JavaScript", "Responsive Design", "Backend Basics"]
        );
    }

    #[test]
    fn test_security_with_empty_syllabus() {
        let result = analyzer().analyze("", "security").unwrap();
        assert!(result.found_skills.is_empty());
        assert_eq!(
            result.missing_skills,
            vec![
                "Networking Basics",
                "Security Fundamentals",
                "Cryptography Basics",
                "Risk Management",
                "Ethical Hacking"
            ]
        );
        assert!(result.roadmap.is_empty());
    }

    #[test]
    fn test_ml_with_python_machine_learning_statistics() {
        let result = analyzer()
            .analyze("python and machine learning and statistics", "ml")
            .unwrap();
        assert_eq!(
            result.found_skills,
            vec!["Python Programming", "Statistics", "ML Basics"]
        );
        assert_eq!(
            result.missing_skills,
            vec!["Data Preprocessing", "Model Evaluation"]
        );
        assert!(result.roadmap.is_empty());
    }

    #[test]
    fn test_role_is_trimmed() {
        let result = analyzer().analyze("html", " web ").unwrap();
        assert_eq!(result.role, RoleId::new("web"));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let a = analyzer();
        let first = a.analyze("Python, SQL and statistics", "data").unwrap();
        let second = a.analyze("Python, SQL and statistics", "data").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_is_subset_of_requirements_and_disjoint_from_found() {
        let a = analyzer();
        let catalog = SkillCatalog::builtin();
        let syllabi = [
            "",
            "DBMS, SQL, HTML, CSS, JavaScript",
            "python machine learning statistics database",
            "htmlbook ml",
        ];
        for role in catalog.role_ids() {
            let required = catalog.requirements(role.as_str()).unwrap();
            for syllabus in syllabi {
                let result = a.analyze(syllabus, role.as_str()).unwrap();
                assert!(result.missing_skills.iter().all(|s| required.contains(s)));
                assert!(result
                    .missing_skills
                    .iter()
                    .all(|s| !result.found_skills.contains(s)));
                let mut deduped = result.found_skills.clone();
                deduped.sort();
                deduped.dedup();
                assert_eq!(deduped.len(), result.found_skills.len());
            }
        }
    }

    #[test]
    fn test_substitute_catalog_is_used() {
        let json = r#"{
            "keywords": [{ "keyword": "rust", "skill": "Rust" }],
            "roles": [{ "id": "systems", "skills": ["Rust", "Linux"] }],
            "roadmap": [{ "skill": "Linux", "topic": "OS", "course": "LFS101",
                          "project": "Build a shell", "practice": "OverTheWire" }]
        }"#;
        let catalog = Arc::new(SkillCatalog::from_json_str(json).unwrap());
        let analyzer = SkillGapAnalyzer::new(catalog, MatchMode::Substring).unwrap();

        let result = analyzer.analyze("Rust in practice", "systems").unwrap();
        assert_eq!(result.found_skills, vec!["Rust"]);
        assert_eq!(result.missing_skills, vec!["Linux"]);
        assert_eq!(result.roadmap[0].practice, "OverTheWire");
        assert!(analyzer.analyze("rust", "backend").is_err());
    }

    #[test]
    fn test_analyze_all_roles_covers_every_role() {
        let report = analyzer().analyze_all_roles("We study DBMS and SQL");
        assert_eq!(report.len(), 8);

        let backend = report
            .iter()
            .find(|r| r.role.as_str() == "backend")
            .unwrap();
        assert_eq!(backend.matched, vec!["Database Management"]);
        assert_eq!(backend.missing.len(), 4);

        let data = report.iter().find(|r| r.role.as_str() == "data").unwrap();
        assert_eq!(data.matched, vec!["Database Querying"]);
        assert!(data.roadmap.is_empty());
    }

    #[test]
    fn test_analyze_all_roles_agrees_with_single_role() {
        let a = analyzer();
        let syllabus = "python html statistics";
        for row in a.analyze_all_roles(syllabus) {
            let single = a.analyze(syllabus, row.role.as_str()).unwrap();
            assert_eq!(single.missing_skills, row.missing);
            assert_eq!(single.roadmap, row.roadmap);
        }
    }
}
