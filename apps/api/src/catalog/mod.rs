//! Catalog — the fixed tables every match is scored against.
//!
//! Two profile families coexist: `CareerProfile` feeds career recommendation
//! and skills-gap analysis, `JobRole` feeds resume analysis. Both are literal
//! `'static` tables in declaration order; that order is the tie-breaker when
//! ranking.

mod careers;
mod roles;
mod skills;

use serde::Serialize;

pub use careers::CAREERS;
pub use roles::JOB_ROLES;
pub use skills::{SkillCategory, SKILL_CATEGORIES};

/// Seniority bands a career accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthPotential {
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Base compensation band in USD, before experience/skill adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryBand {
    pub min: u32,
    pub max: u32,
}

/// A career entry used by the recommender.
#[derive(Debug, Clone, Serialize)]
pub struct CareerProfile {
    pub name: &'static str,
    pub required_skills: &'static [&'static str],
    pub preferred_skills: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub experience_levels: &'static [ExperienceLevel],
    pub salary_range: SalaryBand,
    pub growth_potential: GrowthPotential,
    pub remote_friendly: bool,
    pub interest_tags: &'static [&'static str],
}

impl CareerProfile {
    pub fn accepts(&self, level: ExperienceLevel) -> bool {
        self.experience_levels.contains(&level)
    }
}

/// A job role used by the resume analyzer.
#[derive(Debug, Clone, Serialize)]
pub struct JobRole {
    pub name: &'static str,
    pub required_skills: &'static [&'static str],
    pub preferred_skills: &'static [&'static str],
    pub experience_keywords: &'static [&'static str],
    pub education_keywords: &'static [&'static str],
}

/// Read-only view over the career and job-role tables.
///
/// Cheap to copy; tests build one over their own `static` slices.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    careers: &'static [CareerProfile],
    roles: &'static [JobRole],
}

impl Catalog {
    pub const fn new(careers: &'static [CareerProfile], roles: &'static [JobRole]) -> Self {
        Self { careers, roles }
    }

    /// The built-in tables shipped with the service.
    pub const fn builtin() -> Self {
        Self::new(CAREERS, JOB_ROLES)
    }

    pub fn careers(&self) -> &'static [CareerProfile] {
        self.careers
    }

    pub fn roles(&self) -> &'static [JobRole] {
        self.roles
    }

    /// Exact, case-sensitive lookup by career name.
    pub fn career(&self, name: &str) -> Option<&'static CareerProfile> {
        self.careers.iter().find(|c| c.name == name)
    }

    /// Exact, case-sensitive lookup by job-role name.
    pub fn role(&self, name: &str) -> Option<&'static JobRole> {
        self.roles.iter().find(|r| r.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_career_names_are_unique() {
        let names: HashSet<_> = CAREERS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CAREERS.len());
    }

    #[test]
    fn test_role_names_are_unique() {
        let names: HashSet<_> = JOB_ROLES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), JOB_ROLES.len());
    }

    #[test]
    fn test_every_profile_has_skills_and_a_valid_band() {
        for career in CAREERS {
            assert!(!career.required_skills.is_empty(), "{}", career.name);
            assert!(!career.preferred_skills.is_empty(), "{}", career.name);
            assert!(!career.interest_tags.is_empty(), "{}", career.name);
            assert!(career.salary_range.min < career.salary_range.max, "{}", career.name);
        }
        for role in JOB_ROLES {
            assert!(!role.required_skills.is_empty(), "{}", role.name);
            assert!(!role.experience_keywords.is_empty(), "{}", role.name);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.career("Data Scientist").is_some());
        assert!(catalog.career("data scientist").is_none());
        assert!(catalog.role("Software Developer").is_some());
        assert!(catalog.role("Software Engineer").is_none());
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.careers()[0].name, "Software Engineer");
        assert_eq!(catalog.careers()[1].name, "Data Scientist");
        assert_eq!(catalog.roles()[0].name, "Software Developer");
    }

    #[test]
    fn test_growth_potential_serializes_with_space() {
        let json = serde_json::to_string(&GrowthPotential::VeryHigh).unwrap();
        assert_eq!(json, r#""Very High""#);
    }
}
