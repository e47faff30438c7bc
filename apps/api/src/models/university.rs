use serde::{Deserialize, Serialize};

/// One of the three fixed academic tracks used to bucket students and
/// universities. Serialized capitalized to match the catalog wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annual fee bounds in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRange {
    pub min: u32,
    pub max: u32,
}

/// A university record from the seed catalog. Field names follow the
/// Kaggle-derived dataset the catalog was sampled from, which mixes
/// camelCase core fields with snake_case dataset extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: String,
    pub name: String,
    pub streams: Vec<Stream>,
    pub courses: Vec<String>,
    /// Minimum percentage required for admission.
    pub min_eligibility: f64,
    pub fees: FeeRange,
    /// ISO date string.
    pub admission_deadline: String,
    /// 1-5 scale.
    pub campus_rating: f64,
    pub location: String,
    pub accepting_applications: bool,
    pub available_seats: u32,
    pub logo_url: String,
    #[serde(rename = "nirf_rank", skip_serializing_if = "Option::is_none")]
    pub nirf_rank: Option<u32>,
    #[serde(rename = "established_year", skip_serializing_if = "Option::is_none")]
    pub established_year: Option<u32>,
    #[serde(rename = "campus_size_acres", skip_serializing_if = "Option::is_none")]
    pub campus_size_acres: Option<u32>,
    #[serde(rename = "specialization", skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Vec<String>>,
}

/// The structured result of marksheet processing: classified stream, the
/// subjects recognized on the transcript, the aggregate percentage, and
/// (once the student has picked them) interest tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksheetData {
    pub stream: Stream,
    pub core_subjects: Vec<String>,
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}
