pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::artifacts::handlers as artifact_handlers;
use crate::session::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume session
        .route(
            "/api/v1/resume",
            post(session_handlers::handle_upload).delete(session_handlers::handle_delete),
        )
        // Analysis
        .route(
            "/api/v1/analysis/score",
            post(analysis_handlers::handle_score),
        )
        // Artifacts
        .route(
            "/api/v1/artifacts/cover-letter",
            post(artifact_handlers::handle_cover_letter),
        )
        .route(
            "/api/v1/artifacts/cold-email",
            post(artifact_handlers::handle_cold_email),
        )
        .route(
            "/api/v1/artifacts/interview-prep",
            post(artifact_handlers::handle_interview_prep),
        )
        .route(
            "/api/v1/artifacts/salary-insights",
            get(artifact_handlers::handle_salary_insights),
        )
        .route(
            "/api/v1/artifacts/roadmap",
            post(artifact_handlers::handle_roadmap),
        )
        .with_state(state)
}
