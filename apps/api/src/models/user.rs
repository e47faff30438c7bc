use serde::{Deserialize, Serialize};

/// A member profile from the seed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub uploaded_files: Vec<FileUpload>,
}

/// Metadata for a stored upload. `size` is the human-readable form shown
/// in listings ("1.2 MB"), not a byte count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub id: String,
    pub filename: String,
    /// ISO date string.
    pub upload_date: String,
    pub file_type: String,
    pub size: String,
}
