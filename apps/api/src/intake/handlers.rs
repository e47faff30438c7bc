use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::intake::ats::{sample_report, AtsReport};
use crate::intake::marksheet::{process_marksheet, MarksheetResponse};
use crate::intake::uploads::register_upload;
use crate::models::user::FileUpload;
use crate::state::AppState;

struct UploadedPart {
    filename: String,
    mimetype: String,
    bytes: Bytes,
}

// Drains every file part of a multipart body. Multipart read errors are
// client errors (truncated body, bad boundary), not server faults.
async fn collect_parts(mut multipart: Multipart) -> Result<Vec<UploadedPart>, AppError> {
    let mut parts = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue; // not a file part
        };
        let mimetype = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("unreadable file part: {e}")))?;
        parts.push(UploadedPart {
            filename,
            mimetype,
            bytes,
        });
    }
    Ok(parts)
}

/// POST /api/v1/marksheet
pub async fn handle_process_marksheet(
    multipart: Multipart,
) -> Result<Json<MarksheetResponse>, AppError> {
    let parts = collect_parts(multipart).await?;
    let part = parts
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    let data = process_marksheet(&part.mimetype, &part.bytes)?;
    tracing::info!(filename = %part.filename, stream = %data.stream, "marksheet processed");
    Ok(Json(MarksheetResponse {
        success: true,
        data,
    }))
}

/// POST /api/v1/uploads
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<FileUpload>>), AppError> {
    let parts = collect_parts(multipart).await?;
    if parts.is_empty() {
        return Err(AppError::Validation(
            "Please select at least one file to upload".to_string(),
        ));
    }

    // Validate the whole batch before recording any of it.
    for part in &parts {
        crate::intake::uploads::validate_upload(&part.mimetype, part.bytes.len())?;
    }

    let mut stored = Vec::with_capacity(parts.len());
    for part in &parts {
        stored.push(register_upload(
            &state.prefs,
            &part.filename,
            &part.mimetype,
            part.bytes.len(),
        )?);
    }
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/v1/uploads
pub async fn handle_list_uploads(
    State(state): State<AppState>,
) -> Result<Json<Vec<FileUpload>>, AppError> {
    Ok(Json(state.prefs.uploaded_files()?))
}

/// GET /api/v1/uploads/:filename/ats-report
pub async fn handle_ats_report(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<AtsReport>, AppError> {
    let known = state
        .prefs
        .uploaded_files()?
        .iter()
        .any(|f| f.filename == filename);
    if !known {
        return Err(AppError::NotFound(format!(
            "no uploaded file named '{filename}'"
        )));
    }
    Ok(Json(sample_report(&filename)))
}
