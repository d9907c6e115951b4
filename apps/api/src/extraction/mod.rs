//! Text signal extraction — unstructured resume or chat text to structured signals.
//!
//! Pure and infallible: text with no recognizable content yields empty
//! signals, never an error.

pub mod candidate;
pub mod education;
pub mod experience;
pub mod organizations;
pub mod skills;

use std::collections::BTreeMap;

use serde::Serialize;

pub use candidate::{CandidateForm, CandidateProfile};
pub use experience::DEFAULT_REFERENCE_YEAR;

/// Everything the extractor could read out of one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedSignals {
    /// Lower-cased, deduplicated, in taxonomy order.
    pub skills: Vec<String>,
    /// Title-cased category name → skills found in it. Empty categories omitted.
    pub skill_categories: BTreeMap<String, Vec<String>>,
    pub experience_years: u32,
    pub education: Vec<String>,
    pub organizations: Vec<String>,
    pub interests: Vec<String>,
}

/// Extractor configured with the year that "present"/"current" resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalExtractor {
    reference_year: i32,
}

impl SignalExtractor {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    pub fn extract(&self, text: &str) -> ExtractedSignals {
        let lower = text.to_lowercase();
        let (skills, skill_categories) = skills::extract_skills(&lower);

        ExtractedSignals {
            skills,
            skill_categories,
            experience_years: experience::extract_experience_years(text, self.reference_year),
            education: education::extract_education(text),
            organizations: organizations::extract_organizations(text),
            interests: candidate::detect_interests(&lower)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = r#"
        Jane Doe, Data Engineer
        Experience: Data Engineer at Northwind Solutions, 2019-2023.
        Built ETL pipelines with Python, SQL and Spark; dashboards in Tableau.
        Education: Master of Data Science
    "#;

    #[test]
    fn test_full_resume_extraction() {
        let signals = SignalExtractor::default().extract(RESUME);
        assert_eq!(signals.skills, vec!["python", "sql", "tableau", "spark"]);
        assert_eq!(signals.experience_years, 4);
        assert!(signals.education.contains(&"data science".to_string()));
        assert_eq!(signals.organizations[0], "Northwind Solutions");
        assert_eq!(signals.skill_categories["Data"], vec!["tableau", "spark"]);
    }

    #[test]
    fn test_whitespace_only_text_yields_empty_signals() {
        let signals = SignalExtractor::default().extract(" \n\t ");
        assert_eq!(signals, ExtractedSignals::default());
    }

    #[test]
    fn test_reference_year_is_configurable() {
        let text = "Analyst, 2020 - current";
        assert_eq!(SignalExtractor::new(2024).extract(text).experience_years, 4);
        assert_eq!(SignalExtractor::new(2030).extract(text).experience_years, 10);
    }

    #[test]
    fn test_interests_detected_from_text() {
        let signals = SignalExtractor::default().extract("Passionate about cloud computing");
        assert_eq!(signals.interests, vec!["cloud computing"]);
    }
}
