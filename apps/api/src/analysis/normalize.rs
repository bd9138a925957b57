//! Skill normalization — canonicalizes a raw skill string into the
//! comparable form used as the matching key everywhere in the pipeline.
//!
//! Steps: lowercase + trim, strip a trailing file-extension suffix, fold
//! known synonyms to canonical short forms, then tokenize, drop stop
//! words, and reduce surviving tokens to a light lemma. Tokens written in
//! all caps in the input (acronyms like AWS, SQL) and tokens of three
//! characters or fewer are never lemmatized.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::nlp;

static EXTENSION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(js|py|tsx|jsx|ts)$").expect("valid regex"));

/// Canonical right-hand forms of the synonym table. Already canonical,
/// so they skip lemmatization ("postgres" must stay "postgres").
static CANONICAL_FORMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SYNONYMS.iter().map(|(_, canonical)| *canonical).collect());

/// Synonym table folding long or variant forms to canonical short forms.
/// Applied as ordered substring replacement; later entries do not
/// re-trigger earlier ones within a single pass.
const SYNONYMS: &[(&str, &str)] = &[
    ("javascript", "js"),
    ("typescript", "ts"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("nodejs", "node"),
    ("node.js", "node"),
    ("mongodb", "mongo"),
    ("postgresql", "postgres"),
    ("sql server", "sqlserver"),
    ("c++", "cpp"),
    ("c#", "csharp"),
];

/// Normalizes a skill string into its canonical matching key.
///
/// Pure function of the input and the fixed synonym/stop-word tables.
/// Never returns an empty string: if every token is dropped, the
/// pre-tokenization lowercase form is returned instead.
pub fn normalize(skill: &str) -> String {
    let trimmed = skill.trim();
    let mut lower = trimmed.to_lowercase();

    lower = EXTENSION_SUFFIX.replace(&lower, "").into_owned();

    for (variant, canonical) in SYNONYMS {
        lower = lower.replace(variant, canonical);
    }

    // All-caps tokens in the original surface are acronyms; their
    // lowercase forms skip lemmatization below.
    let acronyms: HashSet<String> = nlp::tokenize(trimmed)
        .iter()
        .filter(|t| t.len() >= 2 && t.chars().all(|c| c.is_ascii_uppercase()))
        .map(|t| t.to_lowercase())
        .collect();

    let tokens: Vec<String> = nlp::tokenize(&lower)
        .into_iter()
        .filter(|t| !nlp::is_stop_word(t) && t.chars().any(char::is_alphanumeric))
        .map(|t| {
            if acronyms.contains(t) || t.len() <= 3 || CANONICAL_FORMS.contains(t) {
                t.to_string()
            } else {
                lemma(t)
            }
        })
        .collect();

    if tokens.is_empty() {
        lower
    } else {
        tokens.join(" ")
    }
}

/// Light lemmatization: folds regular plurals only. Deliberately gentler
/// than a full stemmer, which is not idempotent and mangles technical
/// terms.
fn lemma(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix('s') {
        return stem.to_string();
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  Python  "), "python");
    }

    #[test]
    fn test_strips_file_extension_suffix() {
        assert_eq!(normalize("React.js"), "react");
        assert_eq!(normalize("main.py"), "main");
    }

    #[test]
    fn test_synonym_folding_collides_variants() {
        assert_eq!(normalize("Node.js"), normalize("NodeJS"));
        assert_eq!(normalize("NodeJS"), "node");
        assert_eq!(normalize("JavaScript"), "js");
        assert_eq!(normalize("C++"), "cpp");
        assert_eq!(normalize("PostgreSQL"), "postgres");
    }

    #[test]
    fn test_acronyms_survive_verbatim() {
        assert_eq!(normalize("AWS"), "aws");
        assert_eq!(normalize("NASA"), "nasa");
        // Protected acronym equals its pre-lowercased form.
        assert_eq!(normalize("AWS"), normalize("aws"));
    }

    #[test]
    fn test_stop_words_dropped() {
        assert_eq!(normalize("Proficient in Python"), "proficient python");
    }

    #[test]
    fn test_plural_folding() {
        assert_eq!(normalize("Databases"), "database");
        assert_eq!(normalize("Technologies"), "technology");
        // Short tokens and -ss/-us/-is endings are untouched.
        assert_eq!(normalize("CSS"), "css");
        assert_eq!(normalize("analysis"), "analysis");
    }

    #[test]
    fn test_all_stop_words_falls_back_to_lowercase_form() {
        assert_eq!(normalize("The"), "the");
    }

    #[test]
    fn test_never_empty_for_nonempty_input() {
        for input in ["x", "The And", "5", "C++", "  a  "] {
            assert!(!normalize(input).is_empty(), "empty key for {input:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "JavaScript",
            "React.js",
            "AWS certified",
            "Machine Learning",
            "PostgreSQL databases",
            "5+ years experience",
            "Bachelor of Science",
            "Node.js",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_lowercase_input_normalizes_identically() {
        for input in ["AWS", "Python", "React.js", "SQL", "Machine Learning"] {
            assert_eq!(
                normalize(&input.to_lowercase()),
                normalize(input),
                "case divergence for {input:?}"
            );
        }
    }
}
