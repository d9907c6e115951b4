use crate::catalog::{SkillCategory, SKILL_CATEGORIES};
use crate::extraction::CandidateProfile;

use super::CareerRecommendation;

const MAX_INSIGHTS: usize = 4;
const MAX_CALLED_OUT_SKILLS: usize = 3;

/// Natural-language insights in fixed priority order, first four kept.
pub fn generate_insights(
    candidate: &CandidateProfile,
    top: Option<&CareerRecommendation>,
) -> Vec<String> {
    let mut insights = Vec::new();

    if candidate.skills.is_empty() {
        insights.push(
            "Consider adding more specific technical skills to improve your matches.".to_string(),
        );
    }

    match candidate.experience_years {
        0 => insights.push(
            "Entry-level positions are great starting points. Focus on building a strong portfolio."
                .to_string(),
        ),
        years if years >= 5 => insights.push(
            "Your experience level qualifies you for senior positions with higher salaries."
                .to_string(),
        ),
        _ => {}
    }

    if let Some(top) = top {
        if top.match_percentage >= 80.0 {
            insights.push(format!("You're an excellent match for {} roles!", top.career));
        } else if top.match_percentage >= 60.0 {
            insights.push(format!(
                "You have good potential for {} with some skill development.",
                top.career
            ));
        }

        if !top.missing_required_skills.is_empty() {
            let missing: Vec<&str> = top
                .missing_required_skills
                .iter()
                .take(MAX_CALLED_OUT_SKILLS)
                .map(String::as_str)
                .collect();
            insights.push(format!(
                "Consider learning {} to strengthen your profile.",
                missing.join(", ")
            ));
        }
    }

    if let Some(category) = dominant_category(&candidate.skills) {
        insights.push(format!(
            "Your strongest skill area is {category}. Consider roles that leverage this expertise."
        ));
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

/// Category holding the most user skills. A skill counts towards a category
/// when any of its keywords appears inside it; ties go to the earlier
/// category.
pub fn dominant_category(skills: &[String]) -> Option<SkillCategory> {
    let mut best: Option<(SkillCategory, usize)> = None;

    for &category in SKILL_CATEGORIES {
        let count = skills
            .iter()
            .filter(|skill| {
                let skill = skill.to_lowercase();
                category.keywords().iter().any(|k| skill.contains(k))
            })
            .count();

        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((category, count));
        }
    }

    best.map(|(category, _)| category)
}
