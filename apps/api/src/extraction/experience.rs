//! Years-of-experience heuristics.
//!
//! Every heuristic contributes candidates; the result is the largest one,
//! capped at `MAX_EXPERIENCE_YEARS`. Overlapping detections never lower the
//! count.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;

pub const MAX_EXPERIENCE_YEARS: u32 = 25;

/// Year that "present"/"current" resolves to unless configured otherwise.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2024;

static DIRECT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)\+?\s*years?\s*(?:of\s*)?experience",
        r"(\d+)\+?\s*years?\s*in",
        r"experience\s*:\s*(\d+)\+?\s*years?",
        r"(\d+)\+?\s*years?\s*(?:working|developing)",
        r"(\d+)\+?\s*years?\s*(?:as|in)\s*(?:a|an)?\s*\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DATE_RANGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d{4})\s*[-–—]\s*(\d{4}|present|current)",
        r"(\w+\s+\d{4})\s*[-–—]\s*(\w+\s+\d{4}|present|current)",
        r"(\d{1,2}/\d{4})\s*[-–—]\s*(\d{1,2}/\d{4}|present|current)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static EMPLOYMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:worked|employed|served)\s+(?:for\s+)?(\d+)\s+years?",
        r"(\d+)\s+years?\s+(?:at|with|in)\s+\w+",
        r"total\s+(?:of\s+)?(\d+)\s+years?\s+experience",
        r"over\s+(\d+)\s+years?\s+(?:of\s+)?experience",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static FOUR_DIGIT_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

/// Most generous years-of-experience reading of `text`.
pub fn extract_experience_years(text: &str, reference_year: i32) -> u32 {
    let lower = text.to_lowercase();

    let mut candidates = direct_phrase_years(&lower);

    let ranged = date_range_years(&lower, reference_year);
    if ranged > 0 {
        candidates.push(ranged);
    }

    candidates.extend(employment_years(&lower));

    candidates
        .into_iter()
        .max()
        .unwrap_or(0)
        .min(MAX_EXPERIENCE_YEARS)
}

/// A digit run read as a count. Values past `u32::MAX` saturate.
pub(super) fn parse_count(digits: &str) -> Option<u32> {
    match digits.parse::<u32>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

fn captured_numbers<'a>(patterns: &'a [Regex], text: &'a str) -> impl Iterator<Item = u32> + 'a {
    patterns.iter().flat_map(move |re| {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1).and_then(|m| parse_count(m.as_str())))
    })
}

fn direct_phrase_years(text: &str) -> Vec<u32> {
    captured_numbers(&DIRECT_PATTERNS, text).collect()
}

/// Employment phrases above the cap are discarded rather than clamped.
fn employment_years(text: &str) -> Vec<u32> {
    captured_numbers(&EMPLOYMENT_PATTERNS, text)
        .filter(|&years| years <= MAX_EXPERIENCE_YEARS)
        .collect()
}

/// Sum of all detected date ranges, capped.
///
/// Each pattern scans the whole text on its own, so a span such as
/// "jan 2020 - present" is picked up by both the bare-year and the
/// month-year pattern and counted twice.
fn date_range_years(text: &str, reference_year: i32) -> u32 {
    let mut total: u32 = 0;

    for re in DATE_RANGE_PATTERNS.iter() {
        for caps in re.captures_iter(text) {
            let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Some(start_year) = first_year(start.as_str()) else {
                continue;
            };
            let end = end.as_str();
            let end_year = if end.contains("present") || end.contains("current") {
                reference_year
            } else {
                first_year(end).unwrap_or(reference_year)
            };
            let span = (end_year - start_year).max(0) as u32;
            total = total.saturating_add(span);
        }
    }

    total.min(MAX_EXPERIENCE_YEARS)
}

fn first_year(s: &str) -> Option<i32> {
    FOUR_DIGIT_YEAR
        .find(s)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(text: &str) -> u32 {
        extract_experience_years(text, DEFAULT_REFERENCE_YEAR)
    }

    #[test]
    fn test_bare_year_range() {
        assert_eq!(years("Software Engineer, Acme, 2020-2024"), 4);
    }

    #[test]
    fn test_no_signals_is_zero() {
        assert_eq!(years("I enjoy building things and learning new tools."), 0);
        assert_eq!(years(""), 0);
    }

    #[test]
    fn test_direct_phrase() {
        assert_eq!(years("I have 6 years of experience with Python"), 6);
        assert_eq!(years("Experience: 3 years"), 3);
        assert_eq!(years("7+ years developing web apps"), 7);
    }

    #[test]
    fn test_present_resolves_to_reference_year() {
        assert_eq!(extract_experience_years("2019 - present", 2024), 5);
        assert_eq!(extract_experience_years("2019 - present", 2026), 7);
    }

    #[test]
    fn test_month_year_range_is_counted_by_both_patterns() {
        // Bare-year pattern sees "2021 - present" (3), month-year pattern sees
        // "jan 2021 - present" (3); both are summed.
        assert_eq!(years("Jan 2021 - Present"), 6);
    }

    #[test]
    fn test_slash_dates() {
        assert_eq!(years("01/2018 - 06/2021"), 3);
    }

    #[test]
    fn test_ranges_are_summed_and_capped() {
        assert_eq!(years("2010-2015, 2015-2020"), 10);
        assert_eq!(years("1980-2000; 2000-2020"), MAX_EXPERIENCE_YEARS);
    }

    #[test]
    fn test_reversed_range_contributes_nothing() {
        assert_eq!(years("2024-2020"), 0);
    }

    #[test]
    fn test_maximum_across_heuristics_wins() {
        assert_eq!(years("2 years in marketing. 2015-2023"), 8);
        assert_eq!(years("worked for 12 years at Initech. 2022-2024"), 12);
    }

    #[test]
    fn test_direct_phrase_is_capped() {
        assert_eq!(years("40 years of experience"), MAX_EXPERIENCE_YEARS);
    }

    #[test]
    fn test_oversized_employment_phrase_is_dropped() {
        assert_eq!(employment_years("served for 30 years"), Vec::<u32>::new());
        assert_eq!(employment_years("served for 9 years"), vec![9]);
    }

    #[test]
    fn test_adding_a_phrase_never_lowers_the_count() {
        let base = "Backend engineer 2018-2021. 3 years in fintech.";
        let before = years(base);
        for extra in [
            "over 2 years of experience",
            "worked for 10 years at Globex",
            "2000-2004",
            "experience: 1 year",
        ] {
            let after = years(&format!("{base}\n{extra}"));
            assert!(after >= before, "adding '{extra}' lowered {before} to {after}");
        }
    }

    #[test]
    fn test_huge_numbers_saturate_to_the_cap() {
        assert_eq!(years("30 years of experience"), MAX_EXPERIENCE_YEARS);
        assert_eq!(years("99999999999 years of experience"), MAX_EXPERIENCE_YEARS);
        assert_eq!(
            years("5 years experience. 99999999999 years of experience"),
            MAX_EXPERIENCE_YEARS
        );
        assert_eq!(employment_years("served for 99999999999 years"), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count("99999999999999999999"), Some(u32::MAX));
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_month_year_closed_range() {
        assert_eq!(years("Analyst, Jan 2019 - Mar 2022"), 3);
    }

    #[test]
    fn test_unicode_dash_ranges() {
        assert_eq!(years("Developer 2016 – 2020"), 4);
        assert_eq!(years("Developer 2016—2019"), 3);
        assert_eq!(years("03/2015 – 09/2017"), 2);
    }
}
