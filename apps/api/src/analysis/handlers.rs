//! Axum route handlers for the analysis API.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::analysis::analyzer::{analyze, AnalysisOutcome};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job_requirement: String,
}

/// POST /api/v1/analysis/score
///
/// Scores the active resume against a job description. Validation-gate
/// failures come back as a 400 with `score: 0` and a message; everything
/// else returns the full analysis object.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Response, AppError> {
    let job_requirement = request.job_requirement.trim().to_string();
    if job_requirement.is_empty() {
        return Err(AppError::Validation(
            "job_requirement cannot be empty".to_string(),
        ));
    }

    // Snapshot the slot; scoring runs on its own copy of the text.
    let (resume_text, domain, filename) = {
        let slot = state.session.read().await;
        let session = slot
            .as_ref()
            .ok_or_else(|| AppError::Validation("No resume available".to_string()))?;
        (
            session.text.clone(),
            session.domain.clone(),
            session.original_filename.clone(),
        )
    };

    let outcome = analyze(
        &resume_text,
        &job_requirement,
        &domain,
        &state.llm,
        state.enricher.as_ref(),
        &state.weights,
    )
    .await;

    match outcome {
        AnalysisOutcome::Rejected(rejection) => Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "score": 0,
                "error": rejection.message,
                "reason": rejection.reason,
                "job_requirement": job_requirement,
                "detected_domain": domain,
            })),
        )
            .into_response()),
        AnalysisOutcome::Report(report) => {
            let mut result = serde_json::to_value(&*report)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialization failed: {e}")))?;
            if let Some(map) = result.as_object_mut() {
                map.insert("filename".to_string(), json!(filename));
            }
            Ok(Json(json!({
                "job_requirement": job_requirement,
                "detected_domain": domain,
                "results": [result],
            }))
            .into_response())
        }
    }
}
