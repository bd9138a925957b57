//! Relevance scoring — blends skill overlap, whole-document semantic
//! similarity and keyword density into one bounded score.
//!
//! Two validation gates run before any matching work: the job text must
//! tokenize to at least `min_job_words` words, and job-side extraction
//! (plus enrichment) must yield at least one keyword. Gate failures are
//! structured results with a zero score, not errors; everything past the
//! gates degrades softly.

use serde::{Deserialize, Serialize};

use crate::analysis::enrichment::{gather_job_skills, gather_resume_skills, SkillEnricher};
use crate::analysis::matcher::{match_skills, DEFAULT_FUZZY_THRESHOLD};
use crate::analysis::semantic::semantic_similarity;

/// Weighting constants for the blended score. Empirically chosen, not
/// derived; kept overridable so they can be tuned without a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub semantic: f64,
    pub density_cap: f64,
    pub fuzzy_threshold: f64,
    pub min_job_words: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.60,
            semantic: 0.30,
            density_cap: 10.0,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            min_job_words: 10,
        }
    }
}

/// Occurrence count of a matched keyword in the resume text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityEntry {
    pub keyword: String,
    pub count: u32,
}

/// Full scoring result: the blended score, its components, and the
/// explainability lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub skill_match_score: f64,
    pub semantic_score: f64,
    pub density_bonus: f64,
    /// Top 20 matched keywords, job-side display forms.
    pub matching_keywords: Vec<String>,
    /// Top 15 unmatched job keywords.
    pub missing_keywords: Vec<String>,
    /// Ten highest-density matched keywords, descending.
    pub keyword_density: Vec<DensityEntry>,
    pub total_job_keywords: usize,
    pub total_resume_skills: usize,
    pub all_job_keywords: Vec<String>,
    /// Resume skill list, truncated to 30 for the response payload.
    pub all_resume_skills: Vec<String>,
}

/// Why a scoring request was rejected before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    InputTooShort,
    NoKeywordsExtracted,
}

/// A failed validation gate: zero score plus a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRejection {
    pub reason: RejectionReason,
    pub message: String,
    pub total_resume_skills: usize,
}

/// Result of a scoring request. Gate failures are values, not errors.
#[derive(Debug, Clone)]
pub enum ScoreOutcome {
    Scored(ScoreBreakdown),
    Rejected(ScoreRejection),
}

/// Runs the full scoring pipeline for one (resume, job) pair.
pub async fn compute_match_score(
    resume_text: &str,
    job_requirement: &str,
    domain: &str,
    enricher: &dyn SkillEnricher,
    weights: &ScoringWeights,
) -> ScoreOutcome {
    // Gate 1: reject before any extraction work.
    let word_count = job_requirement.split_whitespace().count();
    if word_count < weights.min_job_words {
        return ScoreOutcome::Rejected(ScoreRejection {
            reason: RejectionReason::InputTooShort,
            message: format!(
                "Job description too short ({word_count} words). \
                 Please provide at least 50 words for accurate analysis."
            ),
            total_resume_skills: 0,
        });
    }

    let required_skills = gather_job_skills(job_requirement, enricher).await;
    let resume_skills = gather_resume_skills(resume_text, domain, enricher).await;

    // Gate 2: an empty required set cannot be scored.
    if required_skills.is_empty() {
        return ScoreOutcome::Rejected(ScoreRejection {
            reason: RejectionReason::NoKeywordsExtracted,
            message: "Could not extract meaningful keywords from job description. \
                      Please provide more detailed requirements."
                .to_string(),
            total_resume_skills: resume_skills.len(),
        });
    }

    let outcome = match_skills(&resume_skills, &required_skills, weights.fuzzy_threshold);

    let skill_match_score =
        (outcome.matched.len() as f64 / required_skills.len().max(1) as f64) * 100.0;

    let semantic_score = semantic_similarity(resume_text, job_requirement)
        .map(|sim| sim * 100.0)
        .unwrap_or(0.0);

    let densities = keyword_densities(resume_text, &outcome.matched);
    let density_bonus = if densities.is_empty() {
        0.0
    } else {
        let mean =
            densities.iter().map(|d| d.count as f64).sum::<f64>() / densities.len() as f64;
        (mean * 2.0).min(weights.density_cap)
    };

    let final_score = (weights.skill_match * skill_match_score
        + weights.semantic * semantic_score
        + density_bonus)
        .clamp(0.0, 100.0);

    let mut top_density = densities;
    top_density.sort_by(|a, b| b.count.cmp(&a.count));
    top_density.truncate(10);

    ScoreOutcome::Scored(ScoreBreakdown {
        score: round2(final_score),
        skill_match_score: round2(skill_match_score),
        semantic_score: round2(semantic_score),
        density_bonus: round2(density_bonus),
        matching_keywords: outcome.matched.iter().take(20).cloned().collect(),
        missing_keywords: outcome.missing.iter().take(15).cloned().collect(),
        keyword_density: top_density,
        total_job_keywords: required_skills.len(),
        total_resume_skills: resume_skills.len(),
        all_job_keywords: required_skills,
        all_resume_skills: resume_skills.into_iter().take(30).collect(),
    })
}

/// Case-insensitive, non-overlapping substring occurrence counts of the
/// matched keywords in the resume text.
fn keyword_densities(resume_text: &str, matched: &[String]) -> Vec<DensityEntry> {
    let resume_lower = resume_text.to_lowercase();
    matched
        .iter()
        .map(|kw| DensityEntry {
            keyword: kw.clone(),
            count: resume_lower.matches(&kw.to_lowercase()).count() as u32,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
