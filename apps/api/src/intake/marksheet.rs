//! Marksheet processing. Validation is real; extraction is an explicit
//! mock that ignores the document body and returns a fixed transcript, so
//! the rest of the pipeline (stream classification, recommendations) can
//! run end to end without an OCR backend.

use serde::Serialize;

use crate::errors::AppError;
use crate::matching::stream::determine_stream;
use crate::models::university::MarksheetData;

pub const MARKSHEET_ALLOWED_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];
pub const MARKSHEET_MAX_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ExtractedMarksheet {
    pub student_name: &'static str,
    pub subjects: Vec<String>,
    pub percentage: f64,
}

pub fn validate_marksheet(mimetype: &str, size: usize) -> Result<(), AppError> {
    if !MARKSHEET_ALLOWED_TYPES.contains(&mimetype) {
        return Err(AppError::Validation(
            "Invalid file type. Please upload PDF or image.".to_string(),
        ));
    }
    if size > MARKSHEET_MAX_BYTES {
        return Err(AppError::Validation(
            "File size should not exceed 5MB".to_string(),
        ));
    }
    Ok(())
}

/// Mock text extraction. A real deployment would OCR the document here;
/// this returns the fixed demo transcript regardless of input.
pub fn extract_marksheet(_bytes: &[u8]) -> ExtractedMarksheet {
    ExtractedMarksheet {
        student_name: "John Doe",
        subjects: vec![
            "Physics".to_string(),
            "Chemistry".to_string(),
            "Mathematics".to_string(),
            "English".to_string(),
            "Computer Science".to_string(),
        ],
        percentage: 87.5,
    }
}

/// Validates, extracts, and classifies in one step.
pub fn process_marksheet(mimetype: &str, bytes: &[u8]) -> Result<MarksheetData, AppError> {
    validate_marksheet(mimetype, bytes.len())?;

    let extracted = extract_marksheet(bytes);
    tracing::debug!(student = extracted.student_name, "mock extraction complete");

    let stream = determine_stream(&extracted.subjects);
    Ok(MarksheetData {
        stream,
        core_subjects: extracted.subjects,
        percentage: extracted.percentage,
        interests: None,
    })
}

/// Wire shape for a successful processing call.
#[derive(Serialize)]
pub struct MarksheetResponse {
    pub success: bool,
    pub data: MarksheetData,
}
