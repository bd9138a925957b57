//! Analysis orchestrator — sequences extraction → matching → scoring →
//! validation and shapes the externally visible analysis object.
//!
//! Cheap validation gates run before any generator round trip. The
//! AI-generated recommendations and skill-gap sections are fail-soft:
//! both have fixed-shape fallbacks and never abort the request.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::enrichment::SkillEnricher;
use crate::analysis::prompts::{RECOMMENDATIONS_PROMPT_TEMPLATE, SKILL_GAP_PROMPT_TEMPLATE};
use crate::analysis::scoring::{
    compute_match_score, DensityEntry, ScoreOutcome, ScoreRejection, ScoringWeights,
};
use crate::llm_client::prompts::{clip, CAREER_WRITER_SYSTEM, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::nlp;

/// Component scores surfaced next to the blended score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub skill_match: f64,
    pub semantic_similarity: f64,
    pub keyword_density_bonus: f64,
}

/// Qualitative banding of the final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsStatus {
    pub level: String,
    pub label: String,
    pub color: String,
}

/// Keyword-level explainability block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub keyword_density: Vec<DensityEntry>,
    pub total_job_keywords: usize,
    pub total_matched: usize,
    pub match_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub importance: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGapReport {
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub skill_gaps: Vec<SkillGap>,
}

/// The full analysis object relayed verbatim by the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: f64,
    pub score_breakdown: ScoreComponents,
    pub summary: String,
    pub ats_status: AtsStatus,
    pub keyword_analysis: KeywordAnalysis,
    pub recommendations: Vec<String>,
    pub skill_gaps: SkillGapReport,
}

/// Outcome of one analysis request.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Report(Box<AnalysisReport>),
    Rejected(ScoreRejection),
}

/// Runs the scoring pipeline and attaches the generated advice sections.
pub async fn analyze(
    resume_text: &str,
    job_requirement: &str,
    domain: &str,
    llm: &LlmClient,
    enricher: &dyn SkillEnricher,
    weights: &ScoringWeights,
) -> AnalysisOutcome {
    let breakdown =
        match compute_match_score(resume_text, job_requirement, domain, enricher, weights).await {
            ScoreOutcome::Scored(b) => b,
            ScoreOutcome::Rejected(rejection) => {
                info!("Scoring rejected: {:?}", rejection.reason);
                return AnalysisOutcome::Rejected(rejection);
            }
        };

    info!(
        "Scored {:.2}/100 (skill {:.2}, semantic {:.2}, density {:.2})",
        breakdown.score,
        breakdown.skill_match_score,
        breakdown.semantic_score,
        breakdown.density_bonus
    );

    let recommendations = generate_recommendations(
        resume_text,
        job_requirement,
        breakdown.score,
        &breakdown.missing_keywords,
        domain,
        llm,
    )
    .await;

    let skill_gaps = generate_skill_gaps(resume_text, job_requirement, domain, llm).await;

    let total_matched = breakdown.matching_keywords.len();
    let match_percentage = round1(
        total_matched as f64 / breakdown.total_job_keywords.max(1) as f64 * 100.0,
    );

    AnalysisOutcome::Report(Box::new(AnalysisReport {
        score: breakdown.score,
        score_breakdown: ScoreComponents {
            skill_match: breakdown.skill_match_score,
            semantic_similarity: breakdown.semantic_score,
            keyword_density_bonus: breakdown.density_bonus,
        },
        summary: summarize(resume_text, 3),
        ats_status: ats_status(breakdown.score),
        keyword_analysis: KeywordAnalysis {
            matching_keywords: breakdown.matching_keywords,
            missing_keywords: breakdown.missing_keywords,
            keyword_density: breakdown.keyword_density,
            total_job_keywords: breakdown.total_job_keywords,
            total_matched,
            match_percentage,
        },
        recommendations,
        skill_gaps,
    }))
}

/// First `n` sentences of the text, joined with single spaces.
pub fn summarize(text: &str, n: usize) -> String {
    nlp::sentences(text)
        .into_iter()
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bands a final score into a qualitative status.
pub fn ats_status(score: f64) -> AtsStatus {
    let (level, label, color) = if score >= 85.0 {
        ("high", "Excellent Match", "green")
    } else if score >= 70.0 {
        ("medium", "Strong Match", "yellow")
    } else if score >= 50.0 {
        ("medium", "Good Match", "orange")
    } else {
        ("low", "Needs Improvement", "red")
    };
    AtsStatus {
        level: level.to_string(),
        label: label.to_string(),
        color: color.to_string(),
    }
}

const FALLBACK_RECOMMENDATIONS: &[&str] = &[
    "Keywords: Add missing skills to resume",
    "Quantify: Include metrics and numbers",
    "Action Verbs: Use stronger action verbs",
    "Format: Improve resume structure",
];

async fn generate_recommendations(
    resume_text: &str,
    job_requirement: &str,
    score: f64,
    missing_keywords: &[String],
    domain: &str,
    llm: &LlmClient,
) -> Vec<String> {
    let missing_head: Vec<&str> = missing_keywords.iter().take(8).map(String::as_str).collect();
    let prompt = RECOMMENDATIONS_PROMPT_TEMPLATE
        .replace("{domain}", domain)
        .replace("{score}", &format!("{score:.1}"))
        .replace("{missing_keywords}", &missing_head.join(", "))
        .replace("{resume_text}", clip(resume_text, 1500))
        .replace("{job_requirement}", clip(job_requirement, 1000));

    match llm.call_text(&prompt, CAREER_WRITER_SYSTEM).await {
        Ok(text) => {
            let parsed = parse_numbered_lines(&text, 4);
            if parsed.is_empty() {
                warn!("Recommendations response had no numbered lines, using fallback");
                fallback_recommendations()
            } else {
                parsed
            }
        }
        Err(e) => {
            warn!("Recommendations generation failed, using fallback: {e}");
            fallback_recommendations()
        }
    }
}

fn fallback_recommendations() -> Vec<String> {
    FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
}

static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").expect("valid regex"));

/// Keeps lines that look like numbered list items, up to `max` of them.
pub fn parse_numbered_lines(text: &str, max: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| NUMBERED_LINE.is_match(line))
        .take(max)
        .map(str::to_string)
        .collect()
}

async fn generate_skill_gaps(
    resume_text: &str,
    job_requirement: &str,
    domain: &str,
    llm: &LlmClient,
) -> SkillGapReport {
    let prompt = SKILL_GAP_PROMPT_TEMPLATE
        .replace("{domain}", domain)
        .replace("{resume_text}", clip(resume_text, 1000))
        .replace("{job_requirement}", clip(job_requirement, 800));

    match llm.call_json::<SkillGapReport>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(report) => report,
        Err(e) => {
            warn!("Skill gap generation failed, using empty report: {e}");
            SkillGapReport::default()
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
