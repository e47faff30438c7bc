//! University filtering — conjunctive predicates over the seed catalog.
//!
//! Every criterion is optional; an absent field imposes no constraint.
//! Malformed combinations (`min_fee > max_fee`) silently narrow the result
//! set rather than erroring.

use serde::{Deserialize, Serialize};

use crate::models::university::{MarksheetData, Stream, University};

/// Sparse filter over the university catalog. AND semantics across all
/// present fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub stream: Option<Stream>,
    /// Case-insensitive substring against course names.
    pub course: Option<String>,
    /// Keeps universities whose own bar is at least this percentage.
    pub min_eligibility: Option<f64>,
    pub min_fee: Option<u32>,
    pub max_fee: Option<u32>,
    pub min_rating: Option<f64>,
    /// Case-insensitive substring against the campus location.
    pub location: Option<String>,
    pub accepting_only: Option<bool>,
    /// Free text matched against the name or any course.
    pub search_query: Option<String>,
    /// Any interest matching any course (substring) keeps the university.
    pub interests: Option<Vec<String>>,
}

fn any_course_contains(uni: &University, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    uni.courses
        .iter()
        .any(|course| course.to_lowercase().contains(&needle))
}

fn matches_criteria(uni: &University, criteria: &FilterCriteria) -> bool {
    if let Some(stream) = criteria.stream {
        if !uni.streams.contains(&stream) {
            return false;
        }
    }

    if let Some(course) = &criteria.course {
        if !any_course_contains(uni, course) {
            return false;
        }
    }

    if let Some(interests) = &criteria.interests {
        if !interests.is_empty()
            && !interests.iter().any(|interest| any_course_contains(uni, interest))
        {
            return false;
        }
    }

    if let Some(min_eligibility) = criteria.min_eligibility {
        if uni.min_eligibility < min_eligibility {
            return false;
        }
    }

    // Fee ranges overlap when min_fee <= uni.fees.max and max_fee >= uni.fees.min.
    if let Some(min_fee) = criteria.min_fee {
        if uni.fees.max < min_fee {
            return false;
        }
    }
    if let Some(max_fee) = criteria.max_fee {
        if uni.fees.min > max_fee {
            return false;
        }
    }

    if let Some(min_rating) = criteria.min_rating {
        if uni.campus_rating < min_rating {
            return false;
        }
    }

    if let Some(location) = &criteria.location {
        if !uni
            .location
            .to_lowercase()
            .contains(&location.to_lowercase())
        {
            return false;
        }
    }

    if criteria.accepting_only.unwrap_or(false) && !uni.accepting_applications {
        return false;
    }

    if let Some(query) = &criteria.search_query {
        let query = query.to_lowercase();
        let name_match = uni.name.to_lowercase().contains(&query);
        if !name_match && !any_course_contains(uni, query.as_str()) {
            return false;
        }
    }

    true
}

/// Returns the subset of `universities` satisfying every present criterion,
/// in input order.
pub fn filter_universities(
    criteria: &FilterCriteria,
    universities: &[University],
) -> Vec<University> {
    universities
        .iter()
        .filter(|uni| matches_criteria(uni, criteria))
        .cloned()
        .collect()
}

/// The wizard's final step: universities offering the student's stream,
/// within reach of their percentage, and (when interests were picked)
/// offering at least one course touching an interest.
pub fn matching_universities(
    marksheet: &MarksheetData,
    universities: &[University],
) -> Vec<University> {
    universities
        .iter()
        .filter(|uni| {
            let stream_match = uni.streams.contains(&marksheet.stream);
            let percentage_match = marksheet.percentage >= uni.min_eligibility;
            let interest_match = match &marksheet.interests {
                Some(interests) if !interests.is_empty() => interests
                    .iter()
                    .any(|interest| any_course_contains(uni, interest)),
                _ => true,
            };
            stream_match && percentage_match && interest_match
        })
        .cloned()
        .collect()
}
