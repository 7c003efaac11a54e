//! Skill extraction — keyword scan of the syllabus into canonical skill names.

use crate::analysis::matcher::{KeywordMatcher, MatchMode};
use crate::analysis::AnalysisError;
use crate::catalog::models::KeywordMap;

/// One keyword-map row with its matcher compiled.
#[derive(Debug, Clone)]
pub struct CompiledKeyword {
    pub keyword: String,
    pub skill: String,
    matcher: KeywordMatcher,
}

impl CompiledKeyword {
    pub fn is_present(&self, text_lower: &str) -> bool {
        self.matcher.is_present(text_lower)
    }
}

/// Compiles every keyword in map order.
pub fn compile_keywords(
    keywords: &KeywordMap,
    mode: MatchMode,
) -> Result<Vec<CompiledKeyword>, AnalysisError> {
    keywords
        .iter()
        .map(|(keyword, skill)| -> Result<CompiledKeyword, AnalysisError> {
            Ok(CompiledKeyword {
                keyword: keyword.to_string(),
                skill: skill.to_string(),
                matcher: KeywordMatcher::compile(keyword, mode)?,
            })
        })
        .collect()
}

/// Returns canonical skills whose keyword occurs in the syllabus.
///
/// Order follows keyword-map enumeration, not position in the text; a skill
/// reached by several keywords is listed once, at its first matching keyword.
pub fn extract_found_skills(keywords: &[CompiledKeyword], syllabus: &str) -> Vec<String> {
    let text_lower = syllabus.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for entry in keywords {
        if entry.is_present(&text_lower) && !found.iter().any(|s| *s == entry.skill) {
            found.push(entry.skill.clone());
        }
    }

    found
}
