//! Built-in tables shipped with the analyzer.

use std::collections::HashMap;

use crate::catalog::models::{
    KeywordMap, Roadmap, RoadmapEntry, RoleId, RoleRequirements, SkillCatalog,
};

const KEYWORDS: &[(&str, &str)] = &[
    ("dbms", "Database Management"),
    ("database", "Database Management"),
    ("sql", "Database Querying"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("javascript", "JavaScript"),
    ("python", "Python Programming"),
    ("statistics", "Statistics"),
    ("machine learning", "ML Basics"),
    ("ml", "ML Basics"),
];

const ROLES: &[(&str, &[&str])] = &[
    (
        "software",
        &[
            "Programming Basics",
            "Data Structures",
            "Problem Solving",
            "OOP Concepts",
            "Debugging",
        ],
    ),
    (
        "web",
        &[
            "HTML",
            "CSS",
            "JavaScript",
            "Responsive Design",
            "Backend Basics",
        ],
    ),
    (
        "frontend",
        &["HTML", "CSS", "JavaScript", "UI Design", "Framework Basics"],
    ),
    (
        "backend",
        &[
            "Python Programming",
            "Database Management",
            "API Development",
            "System Design",
            "Authentication",
        ],
    ),
    (
        "data",
        &[
            "Database Querying",
            "Statistics",
            "Data Analysis",
            "Excel",
            "Data Visualization",
        ],
    ),
    (
        "ml",
        &[
            "Python Programming",
            "Statistics",
            "ML Basics",
            "Data Preprocessing",
            "Model Evaluation",
        ],
    ),
    (
        "cloud",
        &[
            "Cloud Computing",
            "Virtualization",
            "Networking Basics",
            "Security Basics",
            "DevOps Basics",
        ],
    ),
    (
        "security",
        &[
            "Networking Basics",
            "Security Fundamentals",
            "Cryptography Basics",
            "Risk Management",
            "Ethical Hacking",
        ],
    ),
];

// (skill, topic, course, project, practice)
const ROADMAP: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Python Programming",
        "Programming Fundamentals",
        "NPTEL / Coursera Python",
        "Student Management System",
        "HackerRank",
    ),
    (
        "ML Basics",
        "Statistics + Python",
        "Coursera ML – Andrew Ng",
        "Student Result Prediction",
        "Kaggle",
    ),
    (
        "Responsive Design",
        "Web Technologies",
        "FreeCodeCamp",
        "Responsive Website",
        "Frontend Mentor",
    ),
    (
        "Backend Basics",
        "DBMS",
        "Node.js / Django",
        "Login & Registration System",
        "CodeChef",
    ),
];

impl SkillCatalog {
    /// The default keyword, role and roadmap tables.
    pub fn builtin() -> Self {
        let keywords: Vec<(String, String)> = KEYWORDS
            .iter()
            .map(|(k, s)| (k.to_string(), s.to_string()))
            .collect();

        let roles: Vec<(RoleId, Vec<String>)> = ROLES
            .iter()
            .map(|(id, skills)| {
                (
                    RoleId::new(*id),
                    skills.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();

        let roadmap: HashMap<String, RoadmapEntry> = ROADMAP
            .iter()
            .map(|(skill, topic, course, project, practice)| {
                (
                    skill.to_string(),
                    RoadmapEntry {
                        topic: topic.to_string(),
                        course: course.to_string(),
                        project: project.to_string(),
                        practice: practice.to_string(),
                    },
                )
            })
            .collect();

        SkillCatalog {
            keywords: KeywordMap::from_pairs(keywords),
            roles: RoleRequirements::from_pairs(roles),
            roadmap: Roadmap::from_entries(roadmap),
        }
    }
}
