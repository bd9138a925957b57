//! Career artifacts — cover letters, cold emails, interview prep,
//! salary insights and career roadmaps.
//!
//! Every artifact is a single templated generator call with no control
//! logic of its own. Failures degrade to fixed-shape fallbacks wherever
//! the caller can still do something useful with the result.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::artifacts::prompts::{
    COLD_EMAIL_DIRECT_PROMPT_TEMPLATE, COLD_EMAIL_FOLLOWUP_PROMPT_TEMPLATE,
    COLD_EMAIL_NETWORKING_PROMPT_TEMPLATE, COLD_EMAIL_REFERRAL_PROMPT_TEMPLATE,
    COVER_LETTER_PROMPT_TEMPLATE, INTERVIEW_PREP_PROMPT_TEMPLATE, ROADMAP_PROMPT_TEMPLATE,
    SALARY_INSIGHTS_PROMPT_TEMPLATE, SUBJECT_LINES_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{clip, CAREER_WRITER_SYSTEM, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

pub mod handlers;
pub mod prompts;

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_cover_letter(
    llm: &LlmClient,
    resume_text: &str,
    job_requirement: &str,
    domain: &str,
    company_name: &str,
) -> Result<String, LlmError> {
    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{company_name}", company_name)
        .replace("{domain}", domain)
        .replace("{resume_text}", clip(resume_text, 1000))
        .replace("{job_requirement}", clip(job_requirement, 800));

    llm.call_text(&prompt, CAREER_WRITER_SYSTEM).await
}

// ────────────────────────────────────────────────────────────────────────────
// Cold emails
// ────────────────────────────────────────────────────────────────────────────

/// The four cold email flavors, each with its own prompt and fallback
/// subject lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    Direct,
    Networking,
    Referral,
    Followup,
}

impl EmailType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailType::Direct => "direct",
            EmailType::Networking => "networking",
            EmailType::Referral => "referral",
            EmailType::Followup => "followup",
        }
    }
}

/// Inputs for one cold email generation.
#[derive(Debug, Clone)]
pub struct ColdEmailRequest {
    pub email_type: EmailType,
    pub company_name: String,
    pub recipient_name: String,
    pub recipient_title: String,
    pub job_requirement: String,
    pub additional_context: String,
}

/// A generated cold email. `alternative_subjects` is always populated,
/// via a second generator call or the static fallback table.
#[derive(Debug, Clone, Serialize)]
pub struct ColdEmail {
    pub subject_line: String,
    pub email_body: String,
    pub alternative_subjects: Vec<String>,
}

/// Raw generator output; every field is optional so a partial response
/// can still be repaired instead of rejected.
#[derive(Debug, Deserialize)]
struct ColdEmailDraft {
    #[serde(default)]
    subject_line: Option<String>,
    #[serde(default)]
    email_body: Option<String>,
    #[serde(default)]
    alternative_subjects: Option<Vec<String>>,
}

pub async fn generate_cold_email(
    llm: &LlmClient,
    resume_text: &str,
    request: &ColdEmailRequest,
) -> Result<ColdEmail, LlmError> {
    let recipient = if request.recipient_title.is_empty() {
        request.recipient_name.clone()
    } else {
        format!("{} ({})", request.recipient_name, request.recipient_title)
    };

    let mut context_parts = Vec::new();
    if !request.job_requirement.is_empty() {
        context_parts.push(format!(
            "Job Context: {}",
            clip(&request.job_requirement, 400)
        ));
    }
    if !request.additional_context.is_empty() {
        context_parts.push(format!(
            "Additional Info: {}",
            clip(&request.additional_context, 200)
        ));
    }
    let context = if context_parts.is_empty() {
        "General outreach".to_string()
    } else {
        context_parts.join("\n")
    };

    let (template, resume_budget) = match request.email_type {
        EmailType::Direct => (COLD_EMAIL_DIRECT_PROMPT_TEMPLATE, 800),
        EmailType::Networking => (COLD_EMAIL_NETWORKING_PROMPT_TEMPLATE, 600),
        EmailType::Referral => (COLD_EMAIL_REFERRAL_PROMPT_TEMPLATE, 700),
        EmailType::Followup => (COLD_EMAIL_FOLLOWUP_PROMPT_TEMPLATE, 500),
    };

    let prompt = template
        .replace("{recipient}", &recipient)
        .replace("{company_name}", &request.company_name)
        .replace("{resume_text}", clip(resume_text, resume_budget))
        .replace("{context}", &context);

    let draft: ColdEmailDraft = llm.call_json(&prompt, JSON_ONLY_SYSTEM).await?;

    let email_body = draft
        .email_body
        .filter(|b| !b.trim().is_empty())
        .ok_or(LlmError::EmptyContent)?;

    let subject_line = draft
        .subject_line
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("Regarding Opportunity at {}", request.company_name));

    let alternative_subjects = match draft.alternative_subjects {
        Some(subjects) if !subjects.is_empty() => subjects,
        _ => {
            generate_subject_lines(
                llm,
                &request.company_name,
                request.email_type,
                &request.recipient_name,
            )
            .await
        }
    };

    Ok(ColdEmail {
        subject_line,
        email_body,
        alternative_subjects,
    })
}

/// Suggests subject lines for an email type, falling back to the static
/// table on any generator failure.
pub async fn generate_subject_lines(
    llm: &LlmClient,
    company_name: &str,
    email_type: EmailType,
    recipient_name: &str,
) -> Vec<String> {
    let recipient = if recipient_name.is_empty() {
        "Hiring Manager"
    } else {
        recipient_name
    };
    let prompt = SUBJECT_LINES_PROMPT_TEMPLATE
        .replace("{email_type}", email_type.as_str())
        .replace("{company_name}", company_name)
        .replace("{recipient}", recipient);

    match llm.call_json::<Vec<String>>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(subjects) if !subjects.is_empty() => subjects.into_iter().take(4).collect(),
        Ok(_) => fallback_subject_lines(email_type, company_name),
        Err(e) => {
            warn!("Subject line generation failed, using fallback: {e}");
            fallback_subject_lines(email_type, company_name)
        }
    }
}

/// Static subject lines used when the generator is unavailable.
pub fn fallback_subject_lines(email_type: EmailType, company_name: &str) -> Vec<String> {
    match email_type {
        EmailType::Direct => vec![
            format!("Application for Role at {company_name}"),
            format!("Experienced Professional Interested in {company_name}"),
            format!("Adding Value to {company_name}'s Team"),
        ],
        EmailType::Networking => vec![
            format!("Learning from {company_name}'s Success"),
            format!("Coffee Chat with {company_name} Team?"),
            format!("Seeking Advice from {company_name} Professional"),
        ],
        EmailType::Referral => vec![
            format!("Introduction Request - {company_name}"),
            format!("Referred Connection at {company_name}"),
            format!("Mutual Interest in {company_name}"),
        ],
        EmailType::Followup => vec![
            format!("Following Up - {company_name} Application"),
            format!("Checking In: {company_name} Opportunity"),
            format!("Continued Interest in {company_name}"),
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview prep
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewPrep {
    #[serde(default)]
    pub technical_questions: Vec<String>,
    #[serde(default)]
    pub behavioral_questions: Vec<String>,
    #[serde(default)]
    pub key_talking_points: Vec<String>,
    #[serde(default)]
    pub questions_to_ask: Vec<String>,
}

impl InterviewPrep {
    fn unavailable() -> Self {
        let unavailable = vec!["Unable to generate".to_string()];
        Self {
            technical_questions: unavailable.clone(),
            behavioral_questions: unavailable.clone(),
            key_talking_points: unavailable.clone(),
            questions_to_ask: unavailable,
        }
    }
}

pub async fn generate_interview_prep(
    llm: &LlmClient,
    resume_text: &str,
    job_requirement: &str,
    domain: &str,
) -> InterviewPrep {
    let prompt = INTERVIEW_PREP_PROMPT_TEMPLATE
        .replace("{domain}", domain)
        .replace("{resume_text}", clip(resume_text, 1000))
        .replace("{job_requirement}", clip(job_requirement, 600));

    match llm.call_json::<InterviewPrep>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(prep) => prep,
        Err(e) => {
            warn!("Interview prep generation failed, using fallback: {e}");
            InterviewPrep::unavailable()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Salary insights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryInsights {
    #[serde(default)]
    pub estimated_range: String,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default)]
    pub negotiation_tips: Vec<String>,
}

impl SalaryInsights {
    fn unavailable() -> Self {
        Self {
            estimated_range: "Varies significantly".to_string(),
            factors: vec![
                "Experience level".to_string(),
                "Location".to_string(),
                "Company size".to_string(),
            ],
            negotiation_tips: vec![
                "Research market rates".to_string(),
                "Highlight unique skills".to_string(),
            ],
        }
    }
}

pub async fn generate_salary_insights(
    llm: &LlmClient,
    domain: &str,
    years_experience: &str,
    location: &str,
) -> SalaryInsights {
    let prompt = SALARY_INSIGHTS_PROMPT_TEMPLATE
        .replace("{domain}", domain)
        .replace("{years_experience}", years_experience)
        .replace("{location}", location);

    match llm.call_json::<SalaryInsights>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(insights) => insights,
        Err(e) => {
            warn!("Salary insights generation failed, using fallback: {e}");
            SalaryInsights::unavailable()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career roadmap
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: u32,
    pub title: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRoadmap {
    pub current_position: String,
    pub target_position: String,
    pub total_duration: String,
    pub difficulty_level: String,
    pub phases: Vec<RoadmapPhase>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub networking_tips: Vec<String>,
    #[serde(default)]
    pub portfolio_projects: Vec<String>,
}

pub async fn generate_career_roadmap(
    llm: &LlmClient,
    resume_text: &str,
    current_domain: &str,
    target_role: &str,
    current_experience: &str,
) -> Result<CareerRoadmap, LlmError> {
    let experience_line = if current_experience.is_empty() {
        String::new()
    } else {
        format!("Current experience: {current_experience}")
    };

    let prompt = ROADMAP_PROMPT_TEMPLATE
        .replace("{current_domain}", current_domain)
        .replace("{target_role}", target_role)
        .replace("{experience_line}", &experience_line)
        .replace("{resume_text}", clip(resume_text, 1000));

    llm.call_json(&prompt, JSON_ONLY_SYSTEM).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_type_deserializes_lowercase() {
        let t: EmailType = serde_json::from_str("\"networking\"").unwrap();
        assert_eq!(t, EmailType::Networking);
        assert!(serde_json::from_str::<EmailType>("\"spam\"").is_err());
    }

    #[test]
    fn test_fallback_subject_lines_mention_company() {
        for email_type in [
            EmailType::Direct,
            EmailType::Networking,
            EmailType::Referral,
            EmailType::Followup,
        ] {
            let subjects = fallback_subject_lines(email_type, "Acme");
            assert_eq!(subjects.len(), 3);
            assert!(subjects.iter().all(|s| s.contains("Acme")));
        }
    }

    #[test]
    fn test_cold_email_draft_tolerates_partial_json() {
        let draft: ColdEmailDraft =
            serde_json::from_str(r#"{"email_body": "Hello"}"#).unwrap();
        assert_eq!(draft.email_body.as_deref(), Some("Hello"));
        assert!(draft.subject_line.is_none());
        assert!(draft.alternative_subjects.is_none());
    }

    #[test]
    fn test_interview_prep_deserializes_with_defaults() {
        let prep: InterviewPrep = serde_json::from_str("{}").unwrap();
        assert!(prep.technical_questions.is_empty());

        let prep: InterviewPrep =
            serde_json::from_str(r#"{"technical_questions": ["Explain ownership in Rust"]}"#)
                .unwrap();
        assert_eq!(prep.technical_questions.len(), 1);
    }

    #[test]
    fn test_career_roadmap_deserializes() {
        let json = r#"{
            "current_position": "Backend Engineer",
            "target_position": "ML Engineer",
            "total_duration": "9-12 months",
            "difficulty_level": "Intermediate",
            "phases": [{
                "phase": 1,
                "title": "Foundation Building",
                "duration": "2 months",
                "description": "Math and Python refresher",
                "skills": ["Linear algebra", "NumPy"],
                "resources": ["Course A"],
                "milestones": ["Finish course"]
            }],
            "certifications": ["Cert 1"]
        }"#;
        let roadmap: CareerRoadmap = serde_json::from_str(json).unwrap();
        assert_eq!(roadmap.phases.len(), 1);
        assert_eq!(roadmap.phases[0].phase, 1);
        assert!(roadmap.networking_tips.is_empty());
    }

    #[test]
    fn test_email_type_as_str_round_trip() {
        for (t, s) in [
            (EmailType::Direct, "direct"),
            (EmailType::Networking, "networking"),
            (EmailType::Referral, "referral"),
            (EmailType::Followup, "followup"),
        ] {
            assert_eq!(t.as_str(), s);
            let parsed: EmailType = serde_json::from_str(&format!("\"{s}\"")).unwrap();
            assert_eq!(parsed, t);
        }
    }
}
