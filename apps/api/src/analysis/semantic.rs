//! Semantic similarity between a resume and a job description.
//!
//! TF-IDF over unigrams and bigrams of the two documents (stop words
//! removed, vocabulary capped), then cosine similarity between the two
//! weighted vectors. Degenerate inputs (no usable terms on either side)
//! yield `None`; the scorer maps that to a semantic score of 0.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::nlp;

/// Vocabulary cap: the most frequent terms across both documents.
pub const MAX_VOCABULARY: usize = 500;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Cosine similarity in [0, 1] between the TF-IDF vectors of two
/// documents, or `None` when either document vectorizes to zero.
pub fn semantic_similarity(doc_a: &str, doc_b: &str) -> Option<f64> {
    let terms_a = terms(doc_a);
    let terms_b = terms(doc_b);

    let counts_a = count(&terms_a);
    let counts_b = count(&terms_b);

    let vocabulary = build_vocabulary(&counts_a, &counts_b);
    if vocabulary.is_empty() {
        return None;
    }

    let vec_a = tfidf_vector(&counts_a, &counts_b, &vocabulary, |a, _| a);
    let vec_b = tfidf_vector(&counts_a, &counts_b, &vocabulary, |_, b| b);

    cosine(&vec_a, &vec_b)
}

/// Unigrams and bigrams over lowercased word tokens with stop words
/// removed. Bigrams are formed after stop-word removal.
fn terms(doc: &str) -> Vec<String> {
    let lower = doc.to_lowercase();
    let tokens: Vec<&str> = WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !nlp::is_stop_word(t))
        .collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

fn count(terms: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Selects up to MAX_VOCABULARY terms by total frequency across both
/// documents, breaking ties lexicographically for reproducibility.
fn build_vocabulary<'a>(
    counts_a: &HashMap<&'a str, usize>,
    counts_b: &HashMap<&'a str, usize>,
) -> Vec<&'a str> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for (term, n) in counts_a.iter().chain(counts_b.iter()) {
        *totals.entry(*term).or_insert(0) += *n;
    }

    let mut terms: Vec<(&str, usize)> = totals.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(MAX_VOCABULARY);
    terms.into_iter().map(|(t, _)| t).collect()
}

/// Smoothed IDF over the two-document corpus: ln((1+n)/(1+df)) + 1.
fn tfidf_vector(
    counts_a: &HashMap<&str, usize>,
    counts_b: &HashMap<&str, usize>,
    vocabulary: &[&str],
    pick: impl Fn(usize, usize) -> usize,
) -> Vec<f64> {
    vocabulary
        .iter()
        .map(|term| {
            let in_a = counts_a.get(term).copied().unwrap_or(0);
            let in_b = counts_b.get(term).copied().unwrap_or(0);
            let df = usize::from(in_a > 0) + usize::from(in_b > 0);
            let idf = ((1.0 + 2.0) / (1.0 + df as f64)).ln() + 1.0;
            pick(in_a, in_b) as f64 * idf
        })
        .collect()
}

fn cosine(a: &[f64], b: &[f64]) -> Option<f64> {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a * norm_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Senior backend engineer. Built scalable APIs in Python, \
                          deployed services to AWS, maintained PostgreSQL databases.";
    const JOB: &str = "Looking for a backend engineer experienced with Python services, \
                       AWS deployment and relational databases.";

    #[test]
    fn test_identical_documents_score_one() {
        let sim = semantic_similarity(RESUME, RESUME).unwrap();
        assert!(sim > 0.999, "got {sim}");
    }

    #[test]
    fn test_related_documents_score_between_zero_and_one() {
        let sim = semantic_similarity(RESUME, JOB).unwrap();
        assert!(sim > 0.0 && sim < 1.0, "got {sim}");
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let sim = semantic_similarity("alpha beta gamma", "delta epsilon zeta").unwrap();
        assert!(sim.abs() < 1e-12, "got {sim}");
    }

    #[test]
    fn test_empty_document_is_degenerate() {
        assert!(semantic_similarity("", JOB).is_none());
        assert!(semantic_similarity(RESUME, "").is_none());
    }

    #[test]
    fn test_stop_words_only_is_degenerate() {
        assert!(semantic_similarity("the and of with", JOB).is_none());
    }

    #[test]
    fn test_symmetric() {
        let ab = semantic_similarity(RESUME, JOB).unwrap();
        let ba = semantic_similarity(JOB, RESUME).unwrap();
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_bigrams_contribute() {
        // Shared bigram "machine learning" with no other overlap still
        // produces a nonzero similarity.
        let sim = semantic_similarity(
            "machine learning models",
            "machine learning pipelines",
        )
        .unwrap();
        assert!(sim > 0.0);
    }
}
