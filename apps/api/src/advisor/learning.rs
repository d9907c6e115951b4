use serde::Serialize;

/// Number of missing skills that get learning resources.
pub const MAX_LEARNING_SKILLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningResources {
    pub skill: String,
    pub courses: Vec<String>,
    pub practice: Vec<String>,
    pub projects: Vec<String>,
}

struct Curated {
    skill: &'static str,
    courses: &'static [&'static str],
    practice: &'static [&'static str],
    projects: &'static [&'static str],
}

const CURATED: &[Curated] = &[
    Curated {
        skill: "python",
        courses: &["Python for Everybody (Coursera)", "Complete Python Bootcamp (Udemy)"],
        practice: &["LeetCode", "HackerRank", "Codewars"],
        projects: &["Build a web scraper", "Create a data analysis project"],
    },
    Curated {
        skill: "javascript",
        courses: &["JavaScript: The Complete Guide (Udemy)", "freeCodeCamp JavaScript"],
        practice: &["Codepen", "JSFiddle", "JavaScript30"],
        projects: &["Build a todo app", "Create an interactive website"],
    },
    Curated {
        skill: "react",
        courses: &["React - The Complete Guide (Udemy)", "React Official Tutorial"],
        practice: &["Build React projects", "Contribute to open source"],
        projects: &["Personal portfolio", "E-commerce site", "Social media app"],
    },
    Curated {
        skill: "sql",
        courses: &["SQL for Data Science (Coursera)", "Complete SQL Bootcamp"],
        practice: &["SQLBolt", "W3Schools SQL", "HackerRank SQL"],
        projects: &["Database design project", "Data analysis with SQL"],
    },
    Curated {
        skill: "machine learning",
        courses: &["Machine Learning Course (Coursera)", "Fast.ai Practical Deep Learning"],
        practice: &["Kaggle competitions", "Google Colab notebooks"],
        projects: &["Prediction model", "Image classification", "NLP project"],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Resources for one skill: curated when known, generic otherwise.
pub fn resources_for(skill: &str) -> LearningResources {
    let lower = skill.to_lowercase();
    match CURATED.iter().find(|c| c.skill == lower) {
        Some(curated) => LearningResources {
            skill: skill.to_string(),
            courses: owned(curated.courses),
            practice: owned(curated.practice),
            projects: owned(curated.projects),
        },
        None => LearningResources {
            skill: skill.to_string(),
            courses: vec![format!("Search for \"{skill}\" courses on Coursera, Udemy, or edX")],
            practice: vec![format!("Practice {skill} through hands-on projects")],
            projects: vec![format!("Build a project using {skill}")],
        },
    }
}

/// Resources for the first few missing skills, in the given order.
pub fn learning_recommendations(missing: &[String]) -> Vec<LearningResources> {
    missing
        .iter()
        .take(MAX_LEARNING_SKILLS)
        .map(|skill| resources_for(skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_skill_is_case_insensitive() {
        let resources = resources_for("SQL");
        assert_eq!(resources.skill, "SQL");
        assert_eq!(resources.practice, vec!["SQLBolt", "W3Schools SQL", "HackerRank SQL"]);
    }

    #[test]
    fn test_unknown_skill_gets_generic_resources() {
        let resources = resources_for("terraform");
        assert_eq!(
            resources.courses,
            vec!["Search for \"terraform\" courses on Coursera, Udemy, or edX"]
        );
        assert_eq!(resources.projects, vec!["Build a project using terraform"]);
    }

    #[test]
    fn test_only_first_five_missing_skills() {
        let missing: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let recs = learning_recommendations(&missing);
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[4].skill, "e");
    }
}
