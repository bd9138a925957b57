//! Skill matching — partitions a job's required skills against a
//! resume's skills into matched and missing sets.
//!
//! Two phases over normalized keys: an exact intersection, then a greedy
//! fuzzy pass over the remainder using the Ratcliff/Obershelp ratio.
//! Fuzzy assignment is one-to-one and order-dependent (resume iteration
//! order, first-seen wins on ties), not a maximum-weight bipartite
//! matching.

use std::collections::{HashMap, HashSet};

use crate::analysis::normalize::normalize;
use crate::analysis::similarity::sequence_ratio;

/// Default minimum similarity for a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Matched/missing partition of the job's keyword set. Display forms are
/// the job side's original surface forms; resume-only leftovers are not
/// surfaced.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Ordered normalized view of one keyword list: unique normalized keys in
/// first-seen order, with a display map where the last surface form wins
/// on normalization collisions.
struct NormalizedSet {
    keys: Vec<String>,
    display: HashMap<String, String>,
}

fn normalized_set(keywords: &[String]) -> NormalizedSet {
    let mut keys = Vec::new();
    let mut display = HashMap::new();
    for kw in keywords {
        let norm = normalize(kw);
        if !display.contains_key(&norm) {
            keys.push(norm.clone());
        }
        display.insert(norm, kw.clone());
    }
    NormalizedSet { keys, display }
}

/// Matches resume skills against job keywords at the given similarity
/// threshold. Pure and total: any two string sets are accepted, and empty
/// inputs produce empty partitions.
pub fn match_skills(
    resume_keywords: &[String],
    job_keywords: &[String],
    threshold: f64,
) -> MatchOutcome {
    let resume = normalized_set(resume_keywords);
    let job = normalized_set(job_keywords);

    let resume_keys: HashSet<&str> = resume.keys.iter().map(String::as_str).collect();

    let mut matched = Vec::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    // Exact phase: identical normalized keys match unconditionally.
    for job_key in &job.keys {
        if resume_keys.contains(job_key.as_str()) {
            matched.push(job.display[job_key].clone());
            claimed.insert(job_key.as_str());
        }
    }

    // Fuzzy phase: greedy best-first over the remainder. Each job keyword
    // is claimed at most once; strict `>` keeps the first-seen candidate
    // on ties.
    for resume_key in &resume.keys {
        if claimed.contains(resume_key.as_str()) {
            continue;
        }
        let mut best: Option<(&str, f64)> = None;
        for job_key in &job.keys {
            if claimed.contains(job_key.as_str()) {
                continue;
            }
            let score = sequence_ratio(resume_key, job_key);
            if score >= threshold && best.map_or(true, |(_, b)| score > b) {
                best = Some((job_key.as_str(), score));
            }
        }
        if let Some((job_key, _)) = best {
            matched.push(job.display[job_key].clone());
            claimed.insert(job_key);
        }
    }

    let missing = job
        .keys
        .iter()
        .filter(|k| !claimed.contains(k.as_str()))
        .map(|k| job.display[k].clone())
        .collect();

    MatchOutcome { matched, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_via_normalization_collision() {
        let outcome = match_skills(
            &kws(&["NodeJS", "Python"]),
            &kws(&["Node.js"]),
            DEFAULT_FUZZY_THRESHOLD,
        );
        assert_eq!(outcome.matched, vec!["Node.js"]);
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_matched_display_is_job_side_surface_form() {
        let outcome = match_skills(
            &kws(&["javascript"]),
            &kws(&["JavaScript"]),
            DEFAULT_FUZZY_THRESHOLD,
        );
        assert_eq!(outcome.matched, vec!["JavaScript"]);
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        // "kubernets" vs "kubernetes" ≈ 0.947.
        let outcome = match_skills(
            &kws(&["Kubernets"]),
            &kws(&["Kubernetes"]),
            DEFAULT_FUZZY_THRESHOLD,
        );
        assert_eq!(outcome.matched, vec!["Kubernetes"]);
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_no_fuzzy_match_below_threshold() {
        let outcome = match_skills(&kws(&["Rust"]), &kws(&["Kubernetes"]), DEFAULT_FUZZY_THRESHOLD);
        assert!(outcome.matched.is_empty());
        assert_eq!(outcome.missing, vec!["Kubernetes"]);
    }

    #[test]
    fn test_raising_threshold_only_shrinks_fuzzy_set() {
        let resume = kws(&["Kubernets", "Postgre"]);
        let job = kws(&["Kubernetes", "Postgres"]);

        let loose = match_skills(&resume, &job, 0.85);
        let strict = match_skills(&resume, &job, 0.99);
        assert!(strict.matched.len() <= loose.matched.len());
        let loose_set: HashSet<_> = loose.matched.iter().collect();
        assert!(strict.matched.iter().all(|m| loose_set.contains(m)));
    }

    #[test]
    fn test_fuzzy_assignment_is_one_to_one() {
        // Two near-identical resume skills compete for one job keyword;
        // only the first claims it.
        let outcome = match_skills(
            &kws(&["Kubernets", "Kuberntes"]),
            &kws(&["Kubernetes"]),
            DEFAULT_FUZZY_THRESHOLD,
        );
        assert_eq!(outcome.matched.len(), 1);
    }

    #[test]
    fn test_missing_preserves_job_order() {
        let outcome = match_skills(
            &kws(&[]),
            &kws(&["Python", "AWS", "Terraform"]),
            DEFAULT_FUZZY_THRESHOLD,
        );
        assert_eq!(outcome.missing, vec!["Python", "AWS", "Terraform"]);
    }

    #[test]
    fn test_empty_inputs_are_total() {
        let outcome = match_skills(&kws(&[]), &kws(&[]), DEFAULT_FUZZY_THRESHOLD);
        assert!(outcome.matched.is_empty());
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_exact_phase_commutative_in_pair_count() {
        let a = kws(&["Python", "AWS", "Docker"]);
        let b = kws(&["python", "aws", "Terraform"]);
        let ab = match_skills(&a, &b, DEFAULT_FUZZY_THRESHOLD);
        let ba = match_skills(&b, &a, DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(ab.matched.len(), ba.matched.len());
    }

    #[test]
    fn test_display_collision_last_write_wins() {
        // Both job forms normalize to "node"; the later surface form is
        // the one reported.
        let outcome = match_skills(
            &kws(&["node"]),
            &kws(&["Node.js", "NodeJS"]),
            DEFAULT_FUZZY_THRESHOLD,
        );
        assert_eq!(outcome.matched, vec!["NodeJS"]);
    }
}
