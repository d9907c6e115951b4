use serde::Serialize;

/// Share of the skill score carried by required vs preferred skills.
const REQUIRED_SHARE: f64 = 0.7;
const PREFERRED_SHARE: f64 = 0.3;

/// Loose skill equivalence: either side contained in the other.
///
/// Deliberately looser than the extractor's whole-word rule, so "java"
/// matches a catalog "javascript" here.
pub fn skills_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// How a list of catalog skills is covered by a candidate's skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillCoverage {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillCoverage {
    /// Partitions `catalog_skills`, in catalog order, into matched and missing.
    pub fn compute(catalog_skills: &[&str], user_skills: &[String]) -> Self {
        let user: Vec<String> = user_skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let mut coverage = Self::default();
        for &skill in catalog_skills {
            let skill_lower = skill.to_lowercase();
            if user.iter().any(|u| skills_overlap(u, &skill_lower)) {
                coverage.matched.push(skill.to_string());
            } else {
                coverage.missing.push(skill.to_string());
            }
        }
        coverage
    }

    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Matched share of the list, 0–100. An empty list scores 0.
    pub fn percentage(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.matched.len() as f64 / total as f64 * 100.0,
        }
    }
}

/// `0.7 * required% + 0.3 * preferred%`
pub fn weighted_skill_score(required: &SkillCoverage, preferred: &SkillCoverage) -> f64 {
    REQUIRED_SHARE * required.percentage() + PREFERRED_SHARE * preferred.percentage()
}
