//! Structured candidate input — the form the recommender scores against.
//!
//! Built either from the JSON form (`CandidateForm`) or from a free-text chat
//! message, which is first reduced to the same form.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use super::experience::{parse_count, MAX_EXPERIENCE_YEARS};

/// Raw form fields as submitted. Lists are comma separated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateForm {
    pub skills: String,
    pub interests: String,
    #[serde(deserialize_with = "text_or_number")]
    pub experience: String,
    pub education: String,
    pub goals: String,
}

/// Normalized candidate signals: lower-cased, trimmed, empty items dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub goals: Vec<String>,
    pub experience_years: u32,
    pub education: String,
}

static FIRST_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

impl CandidateProfile {
    pub fn from_form(form: &CandidateForm) -> Self {
        Self {
            skills: split_list(&form.skills),
            interests: split_list(&form.interests),
            goals: split_list(&form.goals),
            experience_years: parse_years(&form.experience),
            education: form.education.to_lowercase(),
        }
    }
}

/// Splits a comma-separated field into normalized items.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// First integer in the text ("5+ years" → 5), 0 when there is none.
fn parse_years(text: &str) -> u32 {
    FIRST_NUMBER
        .find(text)
        .and_then(|m| parse_count(m.as_str()))
        .unwrap_or(0)
        .min(MAX_EXPERIENCE_YEARS)
}

// ────────────────────────────────────────────────────────────────────────────
// Free-text intake
// ────────────────────────────────────────────────────────────────────────────

const CHAT_SKILLS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "react",
    "node.js",
    "sql",
    "html",
    "css",
    "machine learning",
    "data analysis",
    "project management",
    "leadership",
    "communication",
    "problem solving",
    "teamwork",
    "git",
    "docker",
    "aws",
];

const CHAT_INTERESTS: &[&str] = &[
    "web development",
    "data science",
    "machine learning",
    "mobile development",
    "game development",
    "cybersecurity",
    "cloud computing",
    "ai",
    "blockchain",
    "design",
    "user experience",
    "product management",
    "marketing",
    "sales",
];

static CHAT_EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)\s*years?\s*(?:of\s*)?experience",
        r"(\d+)\s*years?\s*in",
        r"(\d+)\+?\s*years?",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

impl CandidateForm {
    /// Reduces a chat message to a form. Phrase lists use plain substring
    /// presence, so "java" is found inside "javascript" here.
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();

        Self {
            skills: present_phrases(&lower, CHAT_SKILLS).join(", "),
            interests: detect_interests(&lower).join(", "),
            experience: experience_phrase(&lower),
            education: String::new(),
            goals: message.to_string(),
        }
    }
}

/// Interest phrases present in already lower-cased text.
pub fn detect_interests(text_lower: &str) -> Vec<&'static str> {
    present_phrases(text_lower, CHAT_INTERESTS)
}

fn present_phrases(text_lower: &str, phrases: &[&'static str]) -> Vec<&'static str> {
    phrases
        .iter()
        .copied()
        .filter(|phrase| text_lower.contains(phrase))
        .collect()
}

fn experience_phrase(text_lower: &str) -> String {
    for re in CHAT_EXPERIENCE_PATTERNS.iter() {
        if let Some(caps) = re.captures(text_lower) {
            return format!("{} years", &caps[1]);
        }
    }

    let mentions = |words: &[&str]| words.iter().any(|w| text_lower.contains(w));
    if mentions(&["beginner", "entry", "junior", "new"]) {
        "0 years".to_string()
    } else if mentions(&["senior", "lead", "principal"]) {
        "5+ years".to_string()
    } else if mentions(&["mid", "intermediate"]) {
        "2-4 years".to_string()
    } else {
        "1 year".to_string()
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
