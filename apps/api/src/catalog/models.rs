use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a selectable job role (e.g. `backend`, `ml`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

impl RoleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static study plan for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub topic: String,
    pub course: String,
    pub project: String,
    pub practice: String,
}

/// Lowercase keyword → canonical skill name, many-to-one.
/// Enumeration order is insertion order; extraction depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMap {
    entries: Vec<(String, String)>,
}

impl KeywordMap {
    /// Keywords are expected lowercase already; the loader normalizes them.
    pub fn from_pairs(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Role → ordered required skills. Role order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleRequirements {
    roles: Vec<(RoleId, Vec<String>)>,
}

impl RoleRequirements {
    pub fn from_pairs(roles: Vec<(RoleId, Vec<String>)>) -> Self {
        Self { roles }
    }

    pub fn get(&self, role: &str) -> Option<&[String]> {
        self.roles
            .iter()
            .find(|(id, _)| id.as_str() == role)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RoleId, &[String])> {
        self.roles.iter().map(|(id, skills)| (id, skills.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }
}

/// Skill → roadmap entry. Coverage is partial on purpose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roadmap {
    entries: HashMap<String, RoadmapEntry>,
}

impl Roadmap {
    pub fn from_entries(entries: HashMap<String, RoadmapEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, skill: &str) -> Option<&RoadmapEntry> {
        self.entries.get(skill)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The three lookup tables the analyzer reads. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCatalog {
    pub keywords: KeywordMap,
    pub roles: RoleRequirements,
    pub roadmap: Roadmap,
}

impl SkillCatalog {
    /// Role keys in catalog order — backs the role selector.
    pub fn role_ids(&self) -> Vec<RoleId> {
        self.roles.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn requirements(&self, role: &str) -> Option<&[String]> {
        self.roles.get(role)
    }

    pub fn roadmap_entry(&self, skill: &str) -> Option<&RoadmapEntry> {
        self.roadmap.get(skill)
    }
}
