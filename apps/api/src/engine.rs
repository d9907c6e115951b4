//! The four scoring operations behind one shared value.
//!
//! Synchronous and pure: the catalog is `'static` data and the extractor is a
//! small `Copy` value, so the engine is shared as `Arc<MatchEngine>` without
//! locks.

use tracing::debug;

use crate::advisor::{self, SkillsGap};
use crate::analysis::{self, AnalysisError, ResumeAnalysis};
use crate::catalog::Catalog;
use crate::extraction::{CandidateForm, CandidateProfile, SignalExtractor};
use crate::ranking::{rank_careers, RankingResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine {
    catalog: Catalog,
    extractor: SignalExtractor,
}

impl MatchEngine {
    pub fn new(catalog: Catalog, extractor: SignalExtractor) -> Self {
        Self { catalog, extractor }
    }

    /// Ranks every catalog career for a structured candidate, best five first.
    pub fn recommend(&self, candidate: &CandidateProfile) -> RankingResult {
        let result = rank_careers(&self.catalog, candidate);
        debug!(
            skills = ?candidate.skills,
            experience_years = candidate.experience_years,
            returned = result.recommendations.len(),
            "ranked careers"
        );
        result
    }

    /// Free-text intake: the message is reduced to a candidate form, then ranked.
    pub fn career_advice(&self, message: &str) -> RankingResult {
        let form = CandidateForm::from_message(message);
        debug!(skills = %form.skills, interests = %form.interests, experience = %form.experience, "parsed chat message");
        self.recommend(&CandidateProfile::from_form(&form))
    }

    pub fn analyze_resume(
        &self,
        text: &str,
        job_role: &str,
    ) -> Result<ResumeAnalysis, AnalysisError> {
        analysis::analyze_resume(&self.catalog, &self.extractor, text, job_role)
    }

    /// `None` when `career` is not a catalog career.
    pub fn skills_gap(&self, skills: &[String], career: &str) -> Option<SkillsGap> {
        let gap = advisor::skills_gap(&self.catalog, skills, career);
        if gap.is_none() {
            debug!(career, "skills gap requested for unknown career");
        }
        gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_science_candidate() -> CandidateProfile {
        CandidateProfile::from_form(&CandidateForm {
            skills: "python, sql, machine learning, pandas, numpy".into(),
            interests: "data analysis, research".into(),
            experience: "4 years".into(),
            education: "Master of Data Science".into(),
            goals: String::new(),
        })
    }

    #[test]
    fn test_recommend_ranks_data_scientist_first() {
        let engine = MatchEngine::default();
        let result = engine.recommend(&data_science_candidate());

        let top = &result.recommendations[0];
        assert_eq!(top.career, "Data Scientist");
        let ux = result
            .recommendations
            .iter()
            .find(|r| r.career == "UX/UI Designer")
            .map(|r| r.match_percentage)
            .unwrap_or(0.0);
        assert!(top.match_percentage > ux);
    }

    #[test]
    fn test_career_advice_goes_through_intake() {
        let engine = MatchEngine::default();
        let message = "I have 3 years of experience with python and sql and love data science";
        let via_chat = engine.career_advice(message);
        let via_form =
            engine.recommend(&CandidateProfile::from_form(&CandidateForm::from_message(message)));
        assert_eq!(via_chat, via_form);
        assert!(!via_chat.recommendations.is_empty());
    }

    #[test]
    fn test_skills_gap_unknown_career() {
        let engine = MatchEngine::default();
        assert!(engine
            .skills_gap(&["python".to_string(), "sql".to_string()], "NonexistentRole")
            .is_none());
    }

    #[test]
    fn test_reference_year_flows_to_extraction() {
        let engine = MatchEngine::new(Catalog::builtin(), SignalExtractor::new(2026));
        let analysis = engine
            .analyze_resume("Engineer at Acme, 2020 - present", "Software Developer")
            .expect("should analyze");
        assert_eq!(analysis.experience_years, 6);
    }
}
