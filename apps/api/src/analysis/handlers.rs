use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{debug, info};

use crate::analysis::ResumeAnalysis;
use crate::documents::extract_text;
use crate::errors::AppError;
use crate::state::AppState;

struct ResumeUpload {
    filename: String,
    data: Bytes,
}

/// POST /api/resume/analyze
///
/// Multipart body: a `resume` file (PDF, DOCX or plain text) and an optional
/// `job_role` field.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut upload: Option<ResumeUpload> = None;
    let mut job_role: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read resume: {e}")))?;
                upload = Some(ResumeUpload { filename, data });
            }
            Some("job_role") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read job_role: {e}")))?;
                if !value.trim().is_empty() {
                    job_role = Some(value.trim().to_string());
                }
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("No resume file provided".into()))?;
    if upload.filename.is_empty() {
        return Err(AppError::Validation("No file selected".into()));
    }
    let job_role = job_role.unwrap_or_else(|| state.config.default_job_role.clone());

    debug!(filename = %upload.filename, bytes = upload.data.len(), "decoding resume");
    let filename = upload.filename.clone();
    let text = tokio::task::spawn_blocking(move || extract_text(&upload.filename, &upload.data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in decode: {e}")))??;

    let analysis = state.engine.analyze_resume(&text, &job_role)?;
    info!(
        filename = %filename,
        job_role = %job_role,
        match_percentage = analysis.match_percentage,
        "resume analyzed"
    );

    Ok(Json(analysis))
}
