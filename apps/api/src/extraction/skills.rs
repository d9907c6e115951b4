use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{SkillCategory, SKILL_CATEGORIES};

struct SkillPattern {
    category: SkillCategory,
    skill: &'static str,
    pattern: Regex,
}

/// One whole-word pattern per taxonomy keyword, in table order.
static SKILL_PATTERNS: LazyLock<Vec<SkillPattern>> = LazyLock::new(|| {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|&category| {
            category.keywords().iter().map(move |&skill| SkillPattern {
                category,
                skill,
                pattern: Regex::new(&format!(r"\b{}\b", regex::escape(skill))).unwrap(),
            })
        })
        .collect()
});

/// Skills found in already lower-cased text, plus their title-cased categories.
///
/// Matching is whole-word: "javascript" never yields "java".
pub fn extract_skills(text_lower: &str) -> (Vec<String>, BTreeMap<String, Vec<String>>) {
    let mut found: Vec<String> = Vec::new();
    let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for entry in SKILL_PATTERNS.iter() {
        if !entry.pattern.is_match(text_lower) {
            continue;
        }
        if !found.iter().any(|s| s == entry.skill) {
            found.push(entry.skill.to_string());
        }
        categories
            .entry(entry.category.title().to_string())
            .or_default()
            .push(entry.skill.to_string());
    }

    (found, categories)
}
