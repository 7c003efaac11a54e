use serde::{Deserialize, Serialize};

use crate::catalog::models::Roadmap;

/// One rendered study-plan block for a missing skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapBlock {
    pub skill: String,
    pub topic: String,
    pub course: String,
    pub project: String,
    pub practice: String,
}

/// One block per missing skill that has a roadmap entry, in missing order.
/// Skills without an entry are skipped here but stay in the missing list.
pub fn build_roadmap_blocks(missing: &[String], roadmap: &Roadmap) -> Vec<RoadmapBlock> {
    missing
        .iter()
        .filter_map(|skill| {
            roadmap.get(skill).map(|entry| RoadmapBlock {
                skill: skill.clone(),
                topic: entry.topic.clone(),
                course: entry.course.clone(),
                project: entry.project.clone(),
                practice: entry.practice.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SkillCatalog;

    #[test]
    fn test_blocks_only_for_skills_with_entries() {
        let catalog = SkillCatalog::builtin();
        let missing = vec![
            "JavaScript".to_string(),
            "Responsive Design".to_string(),
            "Backend Basics".to_string(),
        ];
        let blocks = build_roadmap_blocks(&missing, &catalog.roadmap);
        let skills: Vec<&str> = blocks.iter().map(|b| b.skill.as_str()).collect();
        assert_eq!(skills, vec!["Responsive Design", "Backend Basics"]);
    }

    #[test]
    fn test_block_copies_all_four_fields() {
        let catalog = SkillCatalog::builtin();
        let blocks = build_roadmap_blocks(&["Backend Basics".to_string()], &catalog.roadmap);
        assert_eq!(
            blocks,
            vec![RoadmapBlock {
                skill: "Backend Basics".to_string(),
                topic: "DBMS".to_string(),
                course: "Node.js / Django".to_string(),
                project: "Login & Registration System".to_string(),
                practice: "CodeChef".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_missing_skills_no_blocks() {
        let catalog = SkillCatalog::builtin();
        assert!(build_roadmap_blocks(&[], &catalog.roadmap).is_empty());
    }
}
