//! Resume session — the single-slot state this service holds.
//!
//! At most one resume is active at a time. Uploads replace the slot
//! wholesale, delete clears it, and every analysis or artifact call
//! reads a snapshot from it. The slot is the ONLY shared mutable state
//! in the service; the analysis core itself takes resume and job text as
//! plain parameters.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::llm_client::prompts::{clip, CAREER_WRITER_SYSTEM, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::session::prompts::{DOMAIN_DETECT_PROMPT_TEMPLATE, METADATA_PROMPT_TEMPLATE};

pub mod handlers;
pub mod prompts;

/// Domain used until detection succeeds.
pub const DEFAULT_DOMAIN: &str = "General Career Field";

/// The single resume slot, serialized behind a read-write lock.
pub type SessionSlot = Arc<RwLock<Option<ResumeSession>>>;

pub fn new_session_slot() -> SessionSlot {
    Arc::new(RwLock::new(None))
}

/// Structured facts extracted from the resume at upload time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMetadata {
    #[serde(default = "not_found")]
    pub name: String,
    #[serde(default = "not_found")]
    pub email: String,
    #[serde(default = "not_found")]
    pub phone: String,
    #[serde(default = "not_found")]
    pub location: String,
    #[serde(default = "not_found")]
    pub years_experience: String,
    #[serde(default = "not_found")]
    pub education_level: String,
    #[serde(default = "not_found")]
    pub current_role: String,
}

fn not_found() -> String {
    "Not Found".to_string()
}

impl Default for ResumeMetadata {
    fn default() -> Self {
        Self {
            name: not_found(),
            email: not_found(),
            phone: not_found(),
            location: not_found(),
            years_experience: not_found(),
            education_level: not_found(),
            current_role: not_found(),
        }
    }
}

/// The currently active resume.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSession {
    /// Unique name of the stored file on disk.
    pub stored_filename: String,
    /// Name the file was uploaded under.
    pub original_filename: String,
    /// Cleaned plain text used by every downstream call.
    pub text: String,
    pub domain: String,
    pub metadata: ResumeMetadata,
    pub uploaded_at: DateTime<Utc>,
}

static PRIVATE_USE_GLYPHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{F000}-\x{F8FF}]").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Cleans extracted resume text: drops private-use glyphs PDF extraction
/// leaves behind and collapses whitespace. `None` when nothing readable
/// remains.
pub fn clean_resume_text(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let cleaned = PRIVATE_USE_GLYPHS.replace_all(text, "");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

static DOMAIN_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s/&\-]").expect("valid regex"));

/// Detects the resume's career domain. Falls back to `DEFAULT_DOMAIN` on
/// any generator failure or an empty answer.
pub async fn detect_domain(llm: &LlmClient, resume_text: &str) -> String {
    let prompt = DOMAIN_DETECT_PROMPT_TEMPLATE.replace("{resume_text}", clip(resume_text, 1500));

    match llm.call_text(&prompt, CAREER_WRITER_SYSTEM).await {
        Ok(text) => {
            let domain = DOMAIN_CHARS.replace_all(text.trim(), "").trim().to_string();
            if domain.is_empty() {
                DEFAULT_DOMAIN.to_string()
            } else {
                domain
            }
        }
        Err(e) => {
            warn!("Domain detection failed, using default: {e}");
            DEFAULT_DOMAIN.to_string()
        }
    }
}

/// Extracts structured resume metadata. Falls back to all-"Not Found".
pub async fn extract_metadata(llm: &LlmClient, resume_text: &str) -> ResumeMetadata {
    let prompt = METADATA_PROMPT_TEMPLATE.replace("{resume_text}", clip(resume_text, 1000));

    match llm.call_json::<ResumeMetadata>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Metadata extraction failed, using defaults: {e}");
            ResumeMetadata::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_resume_text_collapses_whitespace() {
        let cleaned = clean_resume_text("Senior\n\nEngineer\t at   Acme").unwrap();
        assert_eq!(cleaned, "Senior Engineer at Acme");
    }

    #[test]
    fn test_clean_resume_text_strips_private_use_glyphs() {
        let cleaned = clean_resume_text("Skills\u{F0B7} Python\u{F0B7} AWS").unwrap();
        assert!(!cleaned.contains('\u{F0B7}'));
        assert!(cleaned.contains("Python"));
    }

    #[test]
    fn test_clean_resume_text_empty_inputs() {
        assert!(clean_resume_text("").is_none());
        assert!(clean_resume_text("   \n\t ").is_none());
        assert!(clean_resume_text("\u{F0B7}\u{F0B7}").is_none());
    }

    #[test]
    fn test_metadata_deserializes_with_partial_fields() {
        let metadata: ResumeMetadata =
            serde_json::from_str(r#"{"name": "Jordan Lee", "email": "jordan@example.com"}"#)
                .unwrap();
        assert_eq!(metadata.name, "Jordan Lee");
        assert_eq!(metadata.phone, "Not Found");
        assert_eq!(metadata.current_role, "Not Found");
    }

    #[test]
    fn test_metadata_default_is_all_not_found() {
        let metadata = ResumeMetadata::default();
        assert_eq!(metadata.name, "Not Found");
        assert_eq!(metadata.education_level, "Not Found");
    }
}
