//! Axum route handlers for the Artifacts API. Every artifact requires an
//! active resume session.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::artifacts::{
    generate_career_roadmap, generate_cold_email, generate_cover_letter,
    generate_interview_prep, generate_salary_insights, CareerRoadmap, ColdEmail,
    ColdEmailRequest, EmailType, InterviewPrep, SalaryInsights,
};
use crate::errors::AppError;
use crate::session::ResumeSession;
use crate::state::AppState;

/// Snapshot of the active session, or a validation error telling the
/// caller to upload first.
async fn current_session(state: &AppState) -> Result<ResumeSession, AppError> {
    let slot = state.session.read().await;
    slot.clone()
        .ok_or_else(|| AppError::Validation("Upload resume first".to_string()))
}

fn default_company() -> String {
    "the company".to_string()
}

fn default_recipient() -> String {
    "Hiring Manager".to_string()
}

fn default_email_type() -> EmailType {
    EmailType::Direct
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub job_requirement: String,
    #[serde(default = "default_company")]
    pub company_name: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /api/v1/artifacts/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let session = current_session(&state).await?;

    let cover_letter = generate_cover_letter(
        &state.llm,
        &session.text,
        &request.job_requirement,
        &session.domain,
        &request.company_name,
    )
    .await
    .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}

// ────────────────────────────────────────────────────────────────────────────
// Cold email
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ColdEmailBody {
    #[serde(default = "default_email_type")]
    pub email_type: EmailType,
    #[serde(default)]
    pub company_name: String,
    #[serde(default = "default_recipient")]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_title: String,
    #[serde(default)]
    pub job_requirement: String,
    #[serde(default)]
    pub additional_context: String,
}

/// POST /api/v1/artifacts/cold-email
pub async fn handle_cold_email(
    State(state): State<AppState>,
    Json(body): Json<ColdEmailBody>,
) -> Result<Json<ColdEmail>, AppError> {
    let session = current_session(&state).await?;

    if body.company_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Company name is required".to_string(),
        ));
    }

    let request = ColdEmailRequest {
        email_type: body.email_type,
        company_name: body.company_name.trim().to_string(),
        recipient_name: body.recipient_name,
        recipient_title: body.recipient_title,
        job_requirement: body.job_requirement,
        additional_context: body.additional_context,
    };

    let email = generate_cold_email(&state.llm, &session.text, &request)
        .await
        .map_err(|e| AppError::Llm(format!("Cold email generation failed: {e}")))?;

    Ok(Json(email))
}

// ────────────────────────────────────────────────────────────────────────────
// Interview prep
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InterviewPrepRequest {
    #[serde(default)]
    pub job_requirement: String,
}

/// POST /api/v1/artifacts/interview-prep
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    Json(request): Json<InterviewPrepRequest>,
) -> Result<Json<InterviewPrep>, AppError> {
    let session = current_session(&state).await?;

    let prep = generate_interview_prep(
        &state.llm,
        &session.text,
        &request.job_requirement,
        &session.domain,
    )
    .await;

    Ok(Json(prep))
}

// ────────────────────────────────────────────────────────────────────────────
// Salary insights
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/artifacts/salary-insights
pub async fn handle_salary_insights(
    State(state): State<AppState>,
) -> Result<Json<SalaryInsights>, AppError> {
    let session = current_session(&state).await?;

    let insights = generate_salary_insights(
        &state.llm,
        &session.domain,
        &session.metadata.years_experience,
        &session.metadata.location,
    )
    .await;

    Ok(Json(insights))
}

// ────────────────────────────────────────────────────────────────────────────
// Career roadmap
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub target_role: String,
    #[serde(default)]
    pub current_experience: String,
}

/// POST /api/v1/artifacts/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<CareerRoadmap>, AppError> {
    let session = current_session(&state).await?;

    if request.target_role.trim().is_empty() {
        return Err(AppError::Validation("Target role is required".to_string()));
    }

    let roadmap = generate_career_roadmap(
        &state.llm,
        &session.text,
        &session.domain,
        request.target_role.trim(),
        &request.current_experience,
    )
    .await
    .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;

    Ok(Json(roadmap))
}
