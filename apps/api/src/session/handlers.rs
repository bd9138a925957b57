//! Axum route handlers for the resume session lifecycle.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::{
    clean_resume_text, detect_domain, extract_metadata, ResumeMetadata, ResumeSession,
};
use crate::state::AppState;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub detected_domain: String,
    pub metadata: ResumeMetadata,
    pub text_length: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// POST /api/v1/resume
///
/// Uploads a resume PDF, extracts its text, and replaces the session
/// slot wholesale. Any previously stored file is removed first.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut payload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(sanitize_filename)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| AppError::Validation("No file selected".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        payload = Some((filename, bytes));
        break;
    }

    let (original_filename, bytes) =
        payload.ok_or_else(|| AppError::Validation("No file in request".to_string()))?;

    if !has_allowed_extension(&original_filename) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF resumes are accepted.".to_string(),
        ));
    }

    // One resume at a time: clear any earlier stored files before saving.
    let upload_dir = PathBuf::from(&state.config.upload_dir);
    wipe_directory(&upload_dir)?;

    let stored_filename = format!("{}_{}", Uuid::new_v4().simple(), original_filename);
    let stored_path = upload_dir.join(&stored_filename);
    tokio::fs::write(&stored_path, &bytes)
        .await
        .map_err(|e| AppError::Document(format!("Failed to store upload: {e}")))?;

    // pdf text extraction is CPU-bound; keep it off the async runtime.
    let extraction = tokio::task::spawn_blocking({
        let path = stored_path.clone();
        move || pdf_extract::extract_text(&path)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))?;

    let raw_text = match extraction {
        Ok(text) => text,
        Err(e) => {
            remove_quietly(&stored_path).await;
            return Err(AppError::Document(format!("Could not read PDF: {e}")));
        }
    };

    let Some(text) = clean_resume_text(&raw_text) else {
        remove_quietly(&stored_path).await;
        return Err(AppError::Validation(
            "Could not extract text from PDF".to_string(),
        ));
    };

    let domain = detect_domain(&state.llm, &text).await;
    let metadata = extract_metadata(&state.llm, &text).await;

    let session = ResumeSession {
        stored_filename,
        original_filename: original_filename.clone(),
        text,
        domain: domain.clone(),
        metadata: metadata.clone(),
        uploaded_at: chrono::Utc::now(),
    };
    let text_length = session.text.len();

    *state.session.write().await = Some(session);

    info!("Resume uploaded: {original_filename} ({text_length} chars, domain: {domain})");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Resume processed successfully".to_string(),
            filename: original_filename,
            detected_domain: domain,
            metadata,
            text_length,
        }),
    ))
}

/// DELETE /api/v1/resume
///
/// Clears the session slot and removes the stored file.
pub async fn handle_delete(
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut slot = state.session.write().await;

    let session = slot
        .take()
        .ok_or_else(|| AppError::NotFound("No resume to delete".to_string()))?;

    let stored_path = PathBuf::from(&state.config.upload_dir).join(&session.stored_filename);
    remove_quietly(&stored_path).await;

    info!("Resume deleted: {}", session.original_filename);

    Ok(Json(DeleteResponse {
        message: "Resume deleted".to_string(),
    }))
}

/// Keeps only the final path component and safe characters.
fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ' '))
        .collect()
}

fn has_allowed_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| ALLOWED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Ensures the upload directory exists and contains no files.
fn wipe_directory(dir: &Path) -> Result<(), AppError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| AppError::Document(format!("Failed to create upload dir: {e}")))?;
    let entries = std::fs::read_dir(dir)
        .map_err(|e| AppError::Document(format!("Failed to read upload dir: {e}")))?;
    for entry in entries.flatten() {
        if entry.path().is_file() {
            if let Err(e) = std::fs::remove_file(entry.path()) {
                warn!("Failed to delete {:?}: {e}", entry.path());
            }
        }
    }
    Ok(())
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        warn!("Failed to remove {path:?}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_strips_paths() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename(r"C:\Users\me\resume.pdf"), "resume.pdf");
        assert_eq!(sanitize_filename("my resume.pdf"), "my resume.pdf");
    }

    #[test]
    fn test_sanitize_filename_drops_unsafe_characters() {
        assert_eq!(sanitize_filename("re$ume!.pdf"), "reume.pdf");
    }

    #[test]
    fn test_allowed_extensions() {
        assert!(has_allowed_extension("resume.pdf"));
        assert!(has_allowed_extension("RESUME.PDF"));
        assert!(!has_allowed_extension("resume.docx"));
        assert!(!has_allowed_extension("resume"));
    }

    #[test]
    fn test_wipe_directory_removes_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("stale_resume.pdf");
        std::fs::write(&file, b"old").unwrap();

        wipe_directory(dir.path()).unwrap();
        assert!(!file.exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_wipe_directory_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads");
        wipe_directory(&nested).unwrap();
        assert!(nested.exists());
    }
}
