//! ATS compatibility report. Entirely mocked: the report is a fixed
//! sample regardless of the file, kept so the review screen has a stable
//! shape to render.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryDemand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    pub keyword: String,
    pub count: u32,
    pub industry: IndustryDemand,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub file_name: String,
    pub score: u8,
    pub keyword_match: u8,
    pub format_score: u8,
    pub readability_score: u8,
    pub recommendations: Vec<Recommendation>,
    pub missing_keywords: Vec<String>,
    pub format_issues: Vec<String>,
    pub keyword_matches: Vec<KeywordMatch>,
}

pub fn sample_report(file_name: &str) -> AtsReport {
    let rec = |severity, text: &str| Recommendation {
        severity,
        text: text.to_string(),
    };
    let keyword = |keyword: &str, count, industry| KeywordMatch {
        keyword: keyword.to_string(),
        count,
        industry,
    };

    AtsReport {
        file_name: file_name.to_string(),
        score: 76,
        keyword_match: 68,
        format_score: 90,
        readability_score: 82,
        recommendations: vec![
            rec(
                Severity::Success,
                "Good use of action verbs in experience section",
            ),
            rec(Severity::Success, "Contact information is clearly presented"),
            rec(
                Severity::Warning,
                "Consider adding more industry-specific keywords",
            ),
            rec(
                Severity::Warning,
                "Add measurable achievements with percentages or numbers",
            ),
            rec(
                Severity::Error,
                "Complex formatting may not parse correctly in ATS",
            ),
        ],
        missing_keywords: vec![
            "project management".to_string(),
            "agile methodology".to_string(),
            "cross-functional".to_string(),
        ],
        format_issues: vec![
            "Tables may not parse correctly".to_string(),
            "Header/footer content might be missed".to_string(),
        ],
        keyword_matches: vec![
            keyword("React", 3, IndustryDemand::High),
            keyword("JavaScript", 4, IndustryDemand::High),
            keyword("TypeScript", 2, IndustryDemand::Medium),
            keyword("CSS", 2, IndustryDemand::Medium),
            keyword("HTML", 1, IndustryDemand::Low),
        ],
    }
}
