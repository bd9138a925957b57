//! Candidate keyword extraction — mines free text for skill, tool,
//! certification, degree and domain terms.
//!
//! Six rule families contribute candidates: proper-noun spans, noun
//! phrases, a battery of universal regex patterns, degree requirements,
//! capitalized multi-word phrases, and bare acronyms. The same rules run
//! on resumes and job postings alike; which side a keyword lands on is
//! decided solely by which document was passed in.
//!
//! Candidates accumulate in first-seen order and are deduplicated by
//! normalized form after cleaning, so truncation is reproducible.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::analysis::normalize::normalize;
use crate::nlp;

/// Only the linguistic rules (entity spans, noun phrases) are bounded to
/// this prefix; the regex families scan the full input.
const LINGUISTIC_SCAN_CHARS: usize = 5000;

/// Generic phrases excluded from the phrase-based rules.
const GENERIC_PHRASES: &[&str] = &[
    "the company",
    "the position",
    "the role",
    "the team",
    "our team",
];

/// Common English words that pass the acronym shape check but are noise.
const STOP_ACRONYMS: &[&str] = &[
    "AND", "OR", "THE", "FOR", "NOT", "BUT", "ARE", "WAS", "WERE", "YOU", "ALL",
];

/// Function words rejected outright as keywords.
const FUNCTION_WORDS: &[&str] = &[
    "the", "and", "or", "for", "with", "this", "that", "from", "have", "been", "will",
];

static UNIVERSAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "<N>+ years experience"
        r"(?i)\b\d+\+?\s*(?:years?|yrs?)\s+(?:of\s+)?(?:experience|exp)\b",
        // "<ACRONYM> certified/certification" — acronym stays case-sensitive
        r"\b([A-Z]{2,}(?:\s+[A-Z]{2,})?)\s+(?i:certified|certification|certificate)\b",
        // "certified <Name>"
        r"(?i)\b(?:certified|certification)\s+([A-Za-z][A-Za-z&]+)\b",
        // tool name before a tool-ish noun
        r"(?i)\b([A-Za-z][A-Za-z0-9+#.]{2,})\s+(?:software|tool|platform|suite|system)\b",
        // "proficient/experienced in <phrase>"
        r"(?i)\b(?:proficient|experienced|skilled|expert|knowledge)\s+(?:in|with|at)\s+([A-Za-z][A-Za-z\s&+#.\-]+?)(?:[.,;\n]|\band\b|$)",
        // format/protocol acronyms — acronym stays case-sensitive
        r"\b([A-Z]{3,5})\s+(?i:format|file|standard|protocol)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static DEGREE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(associate'?s?|bachelor'?s?|master'?s?|phd|doctorate|b\.?a\.?|b\.?s\.?|m\.?a\.?|m\.?s\.?|m\.?b\.?a\.?|b\.?tech|m\.?tech|b\.?sc|m\.?sc|j\.?d\.?|m\.?d\.?|dds|pharmd)\s*(?:degree\s+)?(?:in\s+)?([A-Za-z][A-Za-z\s]*?)?(?:[.,;\n]|\bor\b|\band\b|$)",
    )
    .expect("valid regex")
});

static CAP_PHRASE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3})\b").expect("valid regex"));

static ACRONYM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z]{2,6})\b").expect("valid regex"));

static NON_KEYWORD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s+#.\-]").expect("valid regex"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Extracts up to `max_keywords` candidate keywords from free text.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    // 1 + 2: linguistic rules over a bounded prefix.
    let head = char_prefix(text, LINGUISTIC_SCAN_CHARS);
    candidates.extend(
        nlp::proper_noun_spans(head)
            .into_iter()
            .filter(|s| s.trim().len() > 2),
    );
    candidates.extend(
        nlp::noun_phrases(head, 4)
            .into_iter()
            .filter(|p| p.len() > 2 && !GENERIC_PHRASES.contains(&p.to_lowercase().as_str())),
    );

    // 3: universal regex patterns over the full input.
    for pattern in UNIVERSAL_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let hit = caps
                .get(1)
                .map(|m| m.as_str())
                .unwrap_or_else(|| caps.get(0).map(|m| m.as_str()).unwrap_or_default());
            if hit.trim().len() > 2 {
                candidates.push(hit.trim().to_string());
            }
        }
    }

    // 4: degree requirements.
    for caps in DEGREE_PATTERN.captures_iter(text) {
        let degree = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let field = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let combined = format!("{degree} {field}");
        let combined = combined.trim();
        if combined.len() > 3 {
            candidates.push(combined.to_string());
        }
    }

    // 5: capitalized multi-word phrases.
    for caps in CAP_PHRASE_PATTERN.captures_iter(text) {
        let phrase = &caps[1];
        if phrase.len() > 5 && !GENERIC_PHRASES.contains(&phrase.to_lowercase().as_str()) {
            candidates.push(phrase.to_string());
        }
    }

    // 6: bare acronyms.
    for caps in ACRONYM_PATTERN.captures_iter(text) {
        let acronym = &caps[1];
        if !STOP_ACRONYMS.contains(&acronym) {
            candidates.push(acronym.to_string());
        }
    }

    // Clean, filter, dedupe by normalized form (first seen wins), truncate.
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();
    for candidate in candidates {
        let Some(cleaned) = clean_candidate(&candidate) else {
            continue;
        };
        if seen.insert(normalize(&cleaned)) {
            keywords.push(cleaned);
            if keywords.len() == max_keywords {
                break;
            }
        }
    }
    keywords
}

/// Strips non-keyword characters, collapses whitespace, and rejects
/// empty, too-short, purely numeric, or function-word candidates.
fn clean_candidate(raw: &str) -> Option<String> {
    let cleaned = NON_KEYWORD_CHARS.replace_all(raw, " ");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    if cleaned.len() <= 2 {
        return None;
    }
    if cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if FUNCTION_WORDS.contains(&cleaned.to_lowercase().as_str()) {
        return None;
    }
    Some(cleaned.to_string())
}

/// First `n` characters of `text`, respecting UTF-8 boundaries.
fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_pattern() {
        let keywords = extract_keywords("Must be AWS certified to apply here.", 30);
        assert!(keywords.iter().any(|k| k == "AWS"), "{keywords:?}");
    }

    #[test]
    fn test_years_of_experience_pattern() {
        let keywords = extract_keywords("Requires 5+ years of experience in backend work.", 30);
        assert!(
            keywords.iter().any(|k| k.contains("years")),
            "{keywords:?}"
        );
    }

    #[test]
    fn test_proficient_in_pattern() {
        let keywords = extract_keywords("Candidates must be proficient in Python.", 30);
        assert!(keywords.iter().any(|k| k.contains("Python")), "{keywords:?}");
    }

    #[test]
    fn test_degree_pattern() {
        let keywords =
            extract_keywords("A Bachelor's degree in Computer Science is required.", 30);
        assert!(
            keywords.iter().any(|k| k.contains("Computer Science")),
            "{keywords:?}"
        );
    }

    #[test]
    fn test_acronym_rule_and_stoplist() {
        let keywords = extract_keywords("Exposure to SQL AND NOT the usual ETL stack.", 30);
        assert!(keywords.iter().any(|k| k == "SQL"));
        assert!(keywords.iter().any(|k| k == "ETL"));
        assert!(!keywords.iter().any(|k| k == "AND"));
        assert!(!keywords.iter().any(|k| k == "NOT"));
    }

    #[test]
    fn test_capitalized_phrase_rule() {
        let keywords = extract_keywords("Experience with Google Cloud Platform deployments.", 30);
        assert!(
            keywords.iter().any(|k| k.contains("Google Cloud")),
            "{keywords:?}"
        );
    }

    #[test]
    fn test_generic_phrases_excluded() {
        let keywords = extract_keywords("You will work with The Company on many initiatives.", 30);
        assert!(!keywords.iter().any(|k| k.eq_ignore_ascii_case("the company")));
    }

    #[test]
    fn test_deduplicates_by_normalized_form() {
        let keywords = extract_keywords("NodeJS, Node.js, Python.", 30);
        let node_like: Vec<_> = keywords
            .iter()
            .filter(|k| k.to_lowercase().contains("node"))
            .collect();
        assert_eq!(node_like.len(), 1, "{keywords:?}");
    }

    #[test]
    fn test_truncates_to_max_keywords() {
        let text = "Python, Java, Rust, Docker, Kafka, Redis, Terraform, Ansible.";
        let keywords = extract_keywords(text, 5);
        assert_eq!(keywords.len(), 5);
    }

    #[test]
    fn test_regex_rules_scan_past_linguistic_prefix() {
        let mut text = "word ".repeat(1500);
        text.push_str("Must be PMP certified.");
        let keywords = extract_keywords(&text, 30);
        assert!(keywords.iter().any(|k| k == "PMP"), "{keywords:?}");
    }

    #[test]
    fn test_short_and_numeric_candidates_rejected() {
        let keywords = extract_keywords("IT 42 ok", 30);
        assert!(!keywords.iter().any(|k| k == "42"));
        assert!(!keywords.iter().any(|k| k == "IT"));
    }

    #[test]
    fn test_empty_input_yields_no_keywords() {
        assert!(extract_keywords("", 30).is_empty());
    }

    #[test]
    fn test_first_seen_order_is_stable() {
        let text = "Senior engineer role. Requires Kafka, Redis and strong Python fundamentals.";
        let a = extract_keywords(text, 30);
        let b = extract_keywords(text, 30);
        assert_eq!(a, b);
    }
}
