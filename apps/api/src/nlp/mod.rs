//! Shallow linguistic pipeline: tokenization, sentence segmentation,
//! noun-phrase chunking and proper-noun span detection.
//!
//! Rule-based throughout. Noun phrases are runs of content words between
//! stop words / punctuation; entity spans are runs of capitalized words.
//! Both are approximations of what a statistical parser would emit, and
//! both feed the candidate extractor, which cleans and filters downstream.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// English stop words filtered during normalization, chunking and
/// TF-IDF vectorization.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor",
    "not", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Checks a lowercase token against the stop-word table.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Splits text into word tokens, preserving surface casing.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Splits text into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment<'a> {
    Word(&'a str),
    Space,
    Break,
}

/// Classifies word-boundary segments so chunkers can distinguish a
/// single space (run continues) from punctuation (run breaks).
fn segments(sentence: &str) -> Vec<Segment<'_>> {
    sentence
        .split_word_bounds()
        .map(|seg| {
            if seg.chars().all(char::is_whitespace) {
                Segment::Space
            } else if seg.chars().any(char::is_alphanumeric) {
                Segment::Word(seg)
            } else {
                Segment::Break
            }
        })
        .collect()
}

/// Extracts candidate noun phrases: maximal runs of content words
/// (non-stop, non-numeric) bounded by stop words or punctuation.
/// Runs longer than `max_words` are discarded, matching the behavior of
/// chunkers that only emit short nominal groups.
pub fn noun_phrases(text: &str, max_words: usize) -> Vec<String> {
    let mut phrases = Vec::new();

    for sentence in sentences(text) {
        let mut run: Vec<&str> = Vec::new();

        let mut flush = |run: &mut Vec<&str>| {
            if !run.is_empty() && run.len() <= max_words {
                phrases.push(run.join(" "));
            }
            run.clear();
        };

        for seg in segments(sentence) {
            match seg {
                Segment::Word(w) => {
                    let is_content = !is_stop_word(&w.to_lowercase())
                        && w.chars().any(char::is_alphabetic);
                    if is_content {
                        run.push(w);
                    } else {
                        flush(&mut run);
                    }
                }
                Segment::Space => {}
                Segment::Break => flush(&mut run),
            }
        }
        flush(&mut run);
    }

    phrases
}

/// Extracts proper-noun spans: runs of 1–4 capitalized words.
/// A lone capitalized word at the start of a sentence is skipped unless
/// it is written in all caps, since sentence case alone is not evidence
/// of a name. Capitalized stop words ("The", "AND") break runs — a name
/// is not made of function words.
pub fn proper_noun_spans(text: &str) -> Vec<String> {
    let mut spans = Vec::new();

    for sentence in sentences(text) {
        let mut run: Vec<&str> = Vec::new();
        let mut run_starts_sentence = false;
        let mut seen_word = false;

        let mut flush = |run: &mut Vec<&str>, starts_sentence: bool| {
            let keep = match run.len() {
                0 => false,
                1 => !starts_sentence || is_all_caps(run[0]),
                n => n <= 4,
            };
            if keep {
                spans.push(run.join(" "));
            }
            run.clear();
        };

        for seg in segments(sentence) {
            match seg {
                Segment::Word(w) => {
                    if is_capitalized(w) && !is_stop_word(&w.to_lowercase()) {
                        if run.is_empty() {
                            run_starts_sentence = !seen_word;
                        }
                        run.push(w);
                    } else {
                        flush(&mut run, run_starts_sentence);
                    }
                    seen_word = true;
                }
                Segment::Space => {}
                Segment::Break => flush(&mut run, run_starts_sentence),
            }
        }
        flush(&mut run, run_starts_sentence);
    }

    spans
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => true,
        _ => false,
    }
}

fn is_all_caps(word: &str) -> bool {
    word.len() >= 2 && word.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_preserves_case() {
        let tokens = tokenize("Built scalable APIs using Python");
        assert_eq!(tokens, vec!["Built", "scalable", "APIs", "using", "Python"]);
    }

    #[test]
    fn test_sentences_splits_on_terminators() {
        let s = sentences("First sentence. Second sentence! Third?");
        assert_eq!(s.len(), 3);
        assert!(s[0].starts_with("First"));
    }

    #[test]
    fn test_stop_words_lowercase_lookup() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("with"));
        assert!(!is_stop_word("python"));
    }

    #[test]
    fn test_noun_phrases_break_on_stop_words() {
        let phrases = noun_phrases("Experience with distributed systems and cloud infrastructure", 4);
        assert!(phrases.contains(&"distributed systems".to_string()));
        assert!(phrases.contains(&"cloud infrastructure".to_string()));
    }

    #[test]
    fn test_noun_phrases_break_on_punctuation() {
        let phrases = noun_phrases("Python, AWS, Docker", 4);
        assert!(phrases.contains(&"Python".to_string()));
        assert!(phrases.contains(&"AWS".to_string()));
        assert!(phrases.contains(&"Docker".to_string()));
        assert!(!phrases.iter().any(|p| p.contains("Python AWS")));
    }

    #[test]
    fn test_noun_phrases_drop_long_runs() {
        let phrases = noun_phrases("alpha beta gamma delta epsilon zeta", 4);
        assert!(phrases.is_empty());
    }

    #[test]
    fn test_proper_noun_spans_multiword() {
        let spans = proper_noun_spans("We use Google Cloud Platform in production.");
        assert!(spans.contains(&"Google Cloud Platform".to_string()));
    }

    #[test]
    fn test_proper_noun_spans_skip_sentence_initial_word() {
        let spans = proper_noun_spans("Experience matters here.");
        assert!(spans.is_empty());
    }

    #[test]
    fn test_proper_noun_spans_keep_sentence_initial_acronym() {
        let spans = proper_noun_spans("AWS powers the deployment.");
        assert!(spans.contains(&"AWS".to_string()));
    }

    #[test]
    fn test_proper_noun_spans_break_on_comma() {
        let spans = proper_noun_spans("Built services with Kafka, Redis and Postgres pipelines.");
        assert!(spans.contains(&"Kafka".to_string()));
        assert!(spans.contains(&"Redis".to_string()));
    }
}
