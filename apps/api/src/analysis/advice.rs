//! Resume advice: recommendation sentences, the Do/Don't checklist and
//! threshold-gated improvement bullets.

use serde::Serialize;

use crate::matching::ScoreBreakdown;

const MAX_CALLED_OUT_SKILLS: usize = 3;

const DOS: &[&str] = &[
    "Quantify your achievements with specific numbers and metrics",
    "Use action verbs to describe your responsibilities and accomplishments",
    "Tailor your resume to match the job description keywords",
    "Include relevant projects that demonstrate your skills",
    "Keep your resume format clean and professional",
];

const DONTS: &[&str] = &[
    "Don't include irrelevant personal information",
    "Don't use generic job descriptions without specific achievements",
    "Don't exceed 2 pages unless you have extensive experience",
    "Don't use unprofessional email addresses",
    "Don't include outdated or irrelevant skills",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallRating {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl OverallRating {
    pub fn from_match(match_percentage: f64) -> Self {
        if match_percentage >= 80.0 {
            Self::Excellent
        } else if match_percentage >= 60.0 {
            Self::Good
        } else if match_percentage >= 40.0 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions {
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub improvements: Vec<String>,
}

/// Static checklist plus improvements gated on sub-score thresholds.
pub fn improvement_suggestions(score: &ScoreBreakdown) -> Suggestions {
    let mut improvements = Vec::new();

    if score.skill_match() < 70.0 {
        improvements.push("Add more relevant technical skills to your skills section".to_string());
    }
    if !score.required.missing.is_empty() {
        improvements.push(
            "Gain experience in the missing required skills through projects or courses".to_string(),
        );
    }
    if score.sub_scores.experience < 50.0 {
        improvements.push(
            "Include more detailed descriptions of your work experience and achievements"
                .to_string(),
        );
    }
    if score.sub_scores.context < 50.0 {
        improvements.push("Use more industry-specific keywords and terminology".to_string());
    }

    Suggestions {
        dos: DOS.iter().map(|s| s.to_string()).collect(),
        donts: DONTS.iter().map(|s| s.to_string()).collect(),
        improvements,
    }
}

/// Role-specific recommendation sentences, in a fixed order.
pub fn resume_recommendations(
    score: &ScoreBreakdown,
    skill_count: usize,
    experience_years: u32,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if score.skill_match() < 50.0 {
        recommendations
            .push("Focus on developing the key technical skills required for this role".to_string());
    }

    if !score.required.missing.is_empty() {
        let missing: Vec<&str> = score
            .required
            .missing
            .iter()
            .take(MAX_CALLED_OUT_SKILLS)
            .map(String::as_str)
            .collect();
        recommendations.push(format!(
            "Consider learning these essential skills: {}",
            missing.join(", ")
        ));
    }

    match experience_years {
        0 => recommendations.push(
            "Highlight any projects, internships, or volunteer work to demonstrate practical experience"
                .to_string(),
        ),
        1 => recommendations.push(
            "Emphasize your learning ability and any relevant projects or coursework".to_string(),
        ),
        _ => {}
    }

    if score.sub_scores.education < 50.0 {
        recommendations.push(
            "Consider pursuing relevant certifications or courses in your target field".to_string(),
        );
    }

    let overall = score.overall_match;
    recommendations.push(
        if overall >= 80.0 {
            "Excellent match! Your profile aligns very well with the job requirements"
        } else if overall >= 60.0 {
            "Good match! Focus on the missing skills to strengthen your application"
        } else {
            "Consider gaining more relevant experience and skills before applying"
        }
        .to_string(),
    );

    if skill_count < 5 {
        recommendations
            .push("Expand your skill set to include both technical and soft skills".to_string());
    }

    recommendations
}

/// Summary label for years of experience.
pub fn experience_summary(years: u32) -> String {
    match years {
        0 => "Entry Level (0 years)".to_string(),
        1 => "1 year".to_string(),
        2..=3 => format!("{years} years (Junior Level)"),
        4..=7 => format!("{years} years (Mid Level)"),
        8..=12 => format!("{years} years (Senior Level)"),
        _ => format!("{years} years (Expert Level)"),
    }
}

pub fn apply_verdict(match_percentage: f64) -> &'static str {
    if match_percentage >= 70.0 {
        "Apply with confidence"
    } else {
        "Improve skills before applying"
    }
}
