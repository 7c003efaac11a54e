//! Loads substitute tables from a JSON document.
//!
//! ```json
//! {
//!   "keywords": [{ "keyword": "dbms", "skill": "Database Management" }],
//!   "roles":    [{ "id": "backend", "skills": ["Database Management"] }],
//!   "roadmap":  [{ "skill": "Database Management", "topic": "...", "course": "...",
//!                  "project": "...", "practice": "..." }]
//! }
//! ```
//!
//! Array order is significant: it becomes keyword enumeration order and role order.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::models::{
    KeywordMap, Roadmap, RoadmapEntry, RoleId, RoleRequirements, SkillCatalog,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog entry: {0}")]
    InvalidEntry(String),

    #[error("keyword '{0}' is listed more than once")]
    DuplicateKeyword(String),

    #[error("role '{0}' is listed more than once")]
    DuplicateRole(String),

    #[error("roadmap entry for '{0}' is listed more than once")]
    DuplicateRoadmapEntry(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    keywords: Vec<KeywordRecord>,
    roles: Vec<RoleRecord>,
    #[serde(default)]
    roadmap: Vec<RoadmapRecord>,
}

#[derive(Debug, Deserialize)]
struct KeywordRecord {
    keyword: String,
    skill: String,
}

#[derive(Debug, Deserialize)]
struct RoleRecord {
    id: String,
    skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RoadmapRecord {
    skill: String,
    topic: String,
    course: String,
    project: String,
    practice: String,
}

impl SkillCatalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded skill catalog from {}: {} keywords, {} roles, {} roadmap entries",
            path.display(),
            catalog.keywords.len(),
            catalog.roles.len(),
            catalog.roadmap.len()
        );
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Ok(SkillCatalog {
            keywords: build_keywords(file.keywords)?,
            roles: build_roles(file.roles)?,
            roadmap: build_roadmap(file.roadmap)?,
        })
    }
}

fn build_keywords(records: Vec<KeywordRecord>) -> Result<KeywordMap, CatalogError> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::with_capacity(records.len());

    for record in records {
        let keyword = record.keyword.trim().to_lowercase();
        let skill = record.skill.trim().to_string();
        if keyword.is_empty() || skill.is_empty() {
            return Err(CatalogError::InvalidEntry(
                "keyword and skill must be non-empty".to_string(),
            ));
        }
        if !seen.insert(keyword.clone()) {
            return Err(CatalogError::DuplicateKeyword(keyword));
        }
        pairs.push((keyword, skill));
    }

    Ok(KeywordMap::from_pairs(pairs))
}

fn build_roles(records: Vec<RoleRecord>) -> Result<RoleRequirements, CatalogError> {
    let mut seen = HashSet::new();
    let mut roles = Vec::with_capacity(records.len());

    for record in records {
        let id = record.id.trim().to_string();
        if id.is_empty() {
            return Err(CatalogError::InvalidEntry("role id must be non-empty".to_string()));
        }
        if !seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateRole(id));
        }

        // First occurrence wins; requirement order is kept.
        let mut skills: Vec<String> = Vec::with_capacity(record.skills.len());
        for skill in record.skills {
            let skill = skill.trim();
            if skill.is_empty() {
                continue;
            }
            if skills.iter().any(|s| s == skill) {
                debug!("Dropping repeated skill '{skill}' in role '{id}'");
                continue;
            }
            skills.push(skill.to_string());
        }
        if skills.is_empty() {
            return Err(CatalogError::InvalidEntry(format!(
                "role '{id}' has no required skills"
            )));
        }

        roles.push((RoleId::new(id), skills));
    }

    Ok(RoleRequirements::from_pairs(roles))
}

fn build_roadmap(records: Vec<RoadmapRecord>) -> Result<Roadmap, CatalogError> {
    let mut entries = HashMap::with_capacity(records.len());

    for record in records {
        let skill = record.skill.trim().to_string();
        if skill.is_empty() {
            return Err(CatalogError::InvalidEntry(
                "roadmap skill must be non-empty".to_string(),
            ));
        }
        if entries.contains_key(&skill) {
            return Err(CatalogError::DuplicateRoadmapEntry(skill));
        }
        entries.insert(
            skill,
            RoadmapEntry {
                topic: record.topic,
                course: record.course,
                project: record.project,
                practice: record.practice,
            },
        );
    }

    Ok(Roadmap::from_entries(entries))
}
