//! Resume/document uploads: validation plus metadata bookkeeping in the
//! preference store. File bodies are not retained; only the metadata the
//! portal lists back to the user is kept.

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::FileUpload;
use crate::store::prefs::Preferences;

pub const UPLOAD_ALLOWED_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/zip",
    "application/x-zip-compressed",
];
pub const UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;

pub fn validate_upload(mimetype: &str, size: usize) -> Result<(), AppError> {
    if !UPLOAD_ALLOWED_TYPES.contains(&mimetype) {
        return Err(AppError::Validation(
            "Unsupported file type. Please upload PDF, DOC, DOCX, or ZIP.".to_string(),
        ));
    }
    if size > UPLOAD_MAX_BYTES {
        return Err(AppError::Validation(
            "File size should not exceed 10MB".to_string(),
        ));
    }
    Ok(())
}

/// Human-readable size for listings: bytes below 1 KB, otherwise one
/// decimal of KB/MB.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Validates and records one upload, returning the stored metadata.
pub fn register_upload(
    prefs: &Preferences,
    filename: &str,
    mimetype: &str,
    size: usize,
) -> Result<FileUpload, AppError> {
    validate_upload(mimetype, size)?;

    let file = FileUpload {
        id: format!("file-{}", Uuid::new_v4()),
        filename: filename.to_string(),
        upload_date: Utc::now().date_naive().to_string(),
        file_type: mimetype.to_string(),
        size: format_file_size(size as u64),
    };
    prefs.add_uploaded_file(file.clone())?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_rejects_unsupported_type() {
        assert!(validate_upload("image/png", 10).is_err());
        assert!(validate_upload("application/pdf", 10).is_ok());
        assert!(validate_upload("application/zip", 10).is_ok());
    }

    #[test]
    fn test_rejects_files_over_ten_megabytes() {
        assert!(validate_upload("application/pdf", UPLOAD_MAX_BYTES).is_ok());
        assert!(validate_upload("application/pdf", UPLOAD_MAX_BYTES + 1).is_err());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_258_291), "1.2 MB");
        assert_eq!(format_file_size(5_976_883), "5.7 MB");
    }

    #[test]
    fn test_register_upload_records_metadata() {
        let prefs = Preferences::new(Arc::new(MemoryStore::new()));
        let file = register_upload(&prefs, "resume.pdf", "application/pdf", 1_258_291).unwrap();
        assert!(file.id.starts_with("file-"));
        assert_eq!(file.size, "1.2 MB");

        let stored = prefs.uploaded_files().unwrap();
        assert_eq!(stored, vec![file]);
    }

    #[test]
    fn test_register_upload_rejects_invalid_without_recording() {
        let prefs = Preferences::new(Arc::new(MemoryStore::new()));
        assert!(register_upload(&prefs, "photo.png", "image/png", 100).is_err());
        assert!(prefs.uploaded_files().unwrap().is_empty());
    }
}
