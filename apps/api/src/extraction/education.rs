use std::sync::LazyLock;

use regex::Regex;

/// Degree families, each capturing the field-of-study words that follow.
static DEGREE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?:bachelor|b\.?s\.?|b\.?a\.?)\s*(?:of|in|degree)?\s*([a-zA-Z\s]+)",
        r"\b(?:master|m\.?s\.?|m\.?a\.?|mba)\s*(?:of|in|degree)?\s*([a-zA-Z\s]+)",
        r"\b(?:phd|ph\.?d\.?|doctorate)\s*(?:of|in|degree)?\s*([a-zA-Z\s]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Free-text education mentions, deduplicated in first-seen order.
pub fn extract_education(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut mentions: Vec<String> = Vec::new();

    for re in DEGREE_PATTERNS.iter() {
        for caps in re.captures_iter(&lower) {
            let Some(field) = caps.get(1) else { continue };
            let field = field.as_str().trim();
            if !field.is_empty() && !mentions.iter().any(|m| m == field) {
                mentions.push(field.to_string());
            }
        }
    }

    mentions
}
