//! Skill enrichment — augments the deterministic extractor's keyword
//! lists with skills the generative model spots in the raw text.
//!
//! Pluggable trait-based backend, carried in `AppState` as
//! `Arc<dyn SkillEnricher>`. Enrichment is strictly additive and
//! fail-soft: any backend error degrades to the extraction-only list and
//! is never surfaced to the caller.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::analysis::extractor::extract_keywords;
use crate::analysis::normalize::normalize;
use crate::analysis::prompts::{JOB_ENRICHMENT_PROMPT_TEMPLATE, RESUME_ENRICHMENT_PROMPT_TEMPLATE};
use crate::llm_client::prompts::{clip, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

/// Extraction cap for the job side before enrichment.
pub const JOB_EXTRACT_CAP: usize = 25;
/// Combined job-side cap after enrichment.
pub const JOB_TOTAL_CAP: usize = 30;
/// Extraction cap for the resume side before enrichment.
pub const RESUME_EXTRACT_CAP: usize = 50;
/// Combined resume-side cap after enrichment.
pub const RESUME_TOTAL_CAP: usize = 60;

/// Enriched skills longer than this are discarded as model noise.
const MAX_SKILL_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("generator call failed: {0}")]
    Generator(String),

    #[error("unparseable enrichment payload: {0}")]
    Payload(String),
}

/// Backend that proposes additional skills beyond the extractor output.
#[async_trait]
pub trait SkillEnricher: Send + Sync {
    /// Additional required skills for a job description.
    async fn job_skills(
        &self,
        job_requirement: &str,
        known: &[String],
    ) -> Result<Vec<String>, EnrichmentError>;

    /// Additional possessed skills for a resume in the given domain.
    async fn resume_skills(
        &self,
        resume_text: &str,
        domain: &str,
        known: &[String],
    ) -> Result<Vec<String>, EnrichmentError>;
}

/// Default backend: one generative call per side.
pub struct LlmEnricher {
    llm: LlmClient,
}

impl LlmEnricher {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SkillEnricher for LlmEnricher {
    async fn job_skills(
        &self,
        job_requirement: &str,
        known: &[String],
    ) -> Result<Vec<String>, EnrichmentError> {
        let prompt = JOB_ENRICHMENT_PROMPT_TEMPLATE
            .replace("{known_skills}", &known.join(", "))
            .replace("{job_description}", clip(job_requirement, 1200));

        let skills: Vec<String> = self
            .llm
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| EnrichmentError::Generator(e.to_string()))?;

        Ok(skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s.len() < MAX_SKILL_CHARS)
            .collect())
    }

    async fn resume_skills(
        &self,
        resume_text: &str,
        domain: &str,
        known: &[String],
    ) -> Result<Vec<String>, EnrichmentError> {
        let known_head: Vec<&str> = known.iter().take(20).map(String::as_str).collect();
        let prompt = RESUME_ENRICHMENT_PROMPT_TEMPLATE
            .replace("{domain}", domain)
            .replace("{known_skills}", &known_head.join(", "))
            .replace("{resume_text}", clip(resume_text, 1500));

        let text = self
            .llm
            .call_text(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| EnrichmentError::Generator(e.to_string()))?;

        // Comma-separated, with newlines tolerated as separators.
        Ok(text
            .replace('\n', ",")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.len() < MAX_SKILL_CHARS)
            .map(str::to_string)
            .collect())
    }
}

/// Extraction-only backend. Used in tests and when no generator is
/// reachable; enrichment simply contributes nothing.
pub struct NoEnrichment;

#[async_trait]
impl SkillEnricher for NoEnrichment {
    async fn job_skills(
        &self,
        _job_requirement: &str,
        _known: &[String],
    ) -> Result<Vec<String>, EnrichmentError> {
        Ok(Vec::new())
    }

    async fn resume_skills(
        &self,
        _resume_text: &str,
        _domain: &str,
        _known: &[String],
    ) -> Result<Vec<String>, EnrichmentError> {
        Ok(Vec::new())
    }
}

/// Required-skill list for a job posting: extractor output plus enriched
/// additions, deduplicated by normalized form (first seen wins), capped.
pub async fn gather_job_skills(
    job_requirement: &str,
    enricher: &dyn SkillEnricher,
) -> Vec<String> {
    let extracted = extract_keywords(job_requirement, JOB_EXTRACT_CAP);

    let enriched = match enricher.job_skills(job_requirement, &extracted).await {
        Ok(skills) => skills,
        Err(e) => {
            warn!("Job skill enrichment failed, using extraction only: {e}");
            Vec::new()
        }
    };

    merge_capped(extracted, enriched, JOB_TOTAL_CAP)
}

/// Possessed-skill list for a resume, same shape as the job side.
pub async fn gather_resume_skills(
    resume_text: &str,
    domain: &str,
    enricher: &dyn SkillEnricher,
) -> Vec<String> {
    let extracted = extract_keywords(resume_text, RESUME_EXTRACT_CAP);

    let enriched = match enricher.resume_skills(resume_text, domain, &extracted).await {
        Ok(skills) => skills,
        Err(e) => {
            warn!("Resume skill enrichment failed, using extraction only: {e}");
            Vec::new()
        }
    };

    merge_capped(extracted, enriched, RESUME_TOTAL_CAP)
}

fn merge_capped(extracted: Vec<String>, enriched: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut merged = Vec::new();
    for skill in extracted.into_iter().chain(enriched) {
        if seen.insert(normalize(&skill)) {
            merged.push(skill);
            if merged.len() == cap {
                break;
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEnricher(Vec<String>);

    #[async_trait]
    impl SkillEnricher for FixedEnricher {
        async fn job_skills(
            &self,
            _job: &str,
            _known: &[String],
        ) -> Result<Vec<String>, EnrichmentError> {
            Ok(self.0.clone())
        }

        async fn resume_skills(
            &self,
            _resume: &str,
            _domain: &str,
            _known: &[String],
        ) -> Result<Vec<String>, EnrichmentError> {
            Ok(self.0.clone())
        }
    }

    struct FailingEnricher;

    #[async_trait]
    impl SkillEnricher for FailingEnricher {
        async fn job_skills(
            &self,
            _job: &str,
            _known: &[String],
        ) -> Result<Vec<String>, EnrichmentError> {
            Err(EnrichmentError::Generator("boom".to_string()))
        }

        async fn resume_skills(
            &self,
            _resume: &str,
            _domain: &str,
            _known: &[String],
        ) -> Result<Vec<String>, EnrichmentError> {
            Err(EnrichmentError::Generator("boom".to_string()))
        }
    }

    const JOB: &str = "Looking for an engineer proficient in Python, with AWS certification \
                       and Docker experience across production systems.";

    #[tokio::test]
    async fn test_enrichment_is_additive() {
        let skills = gather_job_skills(JOB, &FixedEnricher(vec!["Terraform".to_string()])).await;
        assert!(skills.iter().any(|s| s == "Terraform"));
        assert!(skills.iter().any(|s| s.contains("AWS")));
    }

    #[tokio::test]
    async fn test_enrichment_failure_degrades_to_extraction_only() {
        let with_failure = gather_job_skills(JOB, &FailingEnricher).await;
        let extraction_only = gather_job_skills(JOB, &NoEnrichment).await;
        assert_eq!(with_failure, extraction_only);
        assert!(!with_failure.is_empty());
    }

    #[tokio::test]
    async fn test_enriched_duplicates_are_folded() {
        // The enricher echoes an extracted skill under a variant surface
        // form; it must not double-count.
        let skills = gather_job_skills(JOB, &FixedEnricher(vec!["python".to_string()])).await;
        let python_like: Vec<_> = skills
            .iter()
            .filter(|s| s.eq_ignore_ascii_case("python"))
            .collect();
        assert_eq!(python_like.len(), 1);
    }

    #[tokio::test]
    async fn test_job_cap_enforced() {
        let many: Vec<String> = (0..50).map(|i| format!("skill number {i}")).collect();
        let skills = gather_job_skills(JOB, &FixedEnricher(many)).await;
        assert!(skills.len() <= JOB_TOTAL_CAP);
    }

    #[tokio::test]
    async fn test_resume_side_cap_enforced() {
        let many: Vec<String> = (0..100).map(|i| format!("tool variant {i}")).collect();
        let skills =
            gather_resume_skills(JOB, "Software Engineering", &FixedEnricher(many)).await;
        assert!(skills.len() <= RESUME_TOTAL_CAP);
    }
}
