// Skill catalog: keyword map, role requirements and roadmap tables.
// Built once at startup and shared read-only; never mutated afterwards.

pub mod defaults;
pub mod loader;
pub mod models;

pub use models::{RoleId, SkillCatalog};
