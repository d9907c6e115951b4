use std::sync::LazyLock;

use regex::Regex;

const MAX_ORGANIZATIONS: usize = 5;

/// Case-sensitive: organizations are recognized by their capitalization.
static ORGANIZATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?:at|@)\s+([A-Z][a-zA-Z\s&]+(?:Inc|Corp|LLC|Ltd|Company|Technologies|Systems|Solutions))\b",
        r"\b([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*)\s+(?:Inc|Corp|LLC|Ltd|Company|Technologies|Systems|Solutions)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Company names next to a corporate suffix, first five distinct.
pub fn extract_organizations(text: &str) -> Vec<String> {
    let mut organizations: Vec<String> = Vec::new();

    for re in ORGANIZATION_PATTERNS.iter() {
        for caps in re.captures_iter(text) {
            let Some(name) = caps.get(1) else { continue };
            let name = name.as_str().to_string();
            if !organizations.contains(&name) {
                organizations.push(name);
            }
        }
    }

    organizations.truncate(MAX_ORGANIZATIONS);
    organizations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_company_with_suffix() {
        let orgs = extract_organizations("Engineer at Acme Technologies since 2020");
        assert_eq!(orgs[0], "Acme Technologies");
    }

    #[test]
    fn test_standalone_suffix_captures_the_name() {
        let orgs = extract_organizations("Consultant for Globex Corp and Initech LLC.");
        assert!(orgs.contains(&"Globex".to_string()));
        assert!(orgs.contains(&"Initech".to_string()));
    }

    #[test]
    fn test_lowercase_names_are_ignored() {
        assert!(extract_organizations("worked at acme inc for a while").is_empty());
    }

    #[test]
    fn test_truncated_to_five() {
        let text = "Alpha Inc, Bravo Inc, Charlie Inc, Delta Inc, Echo Inc, Foxtrot Inc";
        let orgs = extract_organizations(text);
        assert_eq!(orgs.len(), MAX_ORGANIZATIONS);
        assert_eq!(orgs[0], "Alpha");
    }
}
