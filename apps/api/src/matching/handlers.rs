use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::interests_for_stream;
use crate::errors::AppError;
use crate::matching::ranking::annotate_matches;
use crate::matching::search::{
    all_skills, search_opportunities, sort_opportunities, SearchFilters, SortKey,
};
use crate::matching::university_filter::{
    filter_universities, matching_universities, FilterCriteria,
};
use crate::models::opportunity::{Opportunity, OpportunityType};
use crate::models::university::{MarksheetData, Stream, University};
use crate::state::AppState;

// Splits a comma-separated query param into trimmed, non-empty entries.
fn csv_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Query-string form of `FilterCriteria`; list-valued fields arrive
/// comma-separated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UniversityQuery {
    pub stream: Option<Stream>,
    pub course: Option<String>,
    pub min_eligibility: Option<f64>,
    pub min_fee: Option<u32>,
    pub max_fee: Option<u32>,
    pub min_rating: Option<f64>,
    pub location: Option<String>,
    pub accepting_only: Option<bool>,
    pub search_query: Option<String>,
    pub interests: Option<String>,
}

impl UniversityQuery {
    fn into_criteria(self) -> FilterCriteria {
        let interests = csv_list(self.interests.as_deref());
        FilterCriteria {
            stream: self.stream,
            course: self.course,
            min_eligibility: self.min_eligibility,
            min_fee: self.min_fee,
            max_fee: self.max_fee,
            min_rating: self.min_rating,
            location: self.location,
            accepting_only: self.accepting_only,
            search_query: self.search_query,
            interests: if interests.is_empty() {
                None
            } else {
                Some(interests)
            },
        }
    }
}

#[derive(Serialize)]
pub struct UniversityListResponse {
    pub universities: Vec<University>,
    pub total: usize,
}

/// GET /api/v1/universities
pub async fn handle_list_universities(
    State(state): State<AppState>,
    Query(query): Query<UniversityQuery>,
) -> Result<Json<UniversityListResponse>, AppError> {
    let criteria = query.into_criteria();
    let universities = filter_universities(&criteria, &state.catalog.universities);
    Ok(Json(UniversityListResponse {
        universities,
        total: state.catalog.universities.len(),
    }))
}

/// POST /api/v1/universities/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(marksheet): Json<MarksheetData>,
) -> Result<Json<Vec<University>>, AppError> {
    Ok(Json(matching_universities(
        &marksheet,
        &state.catalog.universities,
    )))
}

/// GET /api/v1/universities/streams/:stream/interests
pub async fn handle_stream_interests(
    Path(stream): Path<Stream>,
) -> Result<Json<Vec<&'static str>>, AppError> {
    Ok(Json(interests_for_stream(stream).to_vec()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpportunityQuery {
    /// Free-text search term.
    pub q: Option<String>,
    /// Comma-separated opportunity types.
    pub types: Option<String>,
    pub remote: Option<bool>,
    /// Comma-separated skill names.
    pub skills: Option<String>,
    pub sort: Option<SortKey>,
    /// Whose skill profile to rank against.
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct OpportunityListResponse {
    pub opportunities: Vec<Opportunity>,
    pub total: usize,
}

/// GET /api/v1/opportunities
pub async fn handle_list_opportunities(
    State(state): State<AppState>,
    Query(query): Query<OpportunityQuery>,
) -> Result<Json<OpportunityListResponse>, AppError> {
    let mut types = Vec::new();
    for raw in csv_list(query.types.as_deref()) {
        let kind: OpportunityType = raw.parse().map_err(AppError::Validation)?;
        types.push(kind);
    }

    let filters = SearchFilters {
        types,
        remote: query.remote.unwrap_or(false),
        skills: csv_list(query.skills.as_deref()),
        search_term: query.q.clone(),
    };

    if let Some(term) = query.q.as_deref() {
        state.prefs.record_search(term)?;
    }

    let mut results = search_opportunities(&state.catalog.opportunities, &filters);

    let user_skills = query
        .user_id
        .as_deref()
        .and_then(|id| state.catalog.user_by_id(id))
        .map(|user| user.skills.clone())
        .unwrap_or_default();
    annotate_matches(&mut results, state.ranker.as_ref(), &user_skills);

    let favorites = state.prefs.favorites()?;
    sort_opportunities(&mut results, query.sort.unwrap_or_default(), &favorites);

    Ok(Json(OpportunityListResponse {
        opportunities: results,
        total: state.catalog.opportunities.len(),
    }))
}

/// GET /api/v1/opportunities/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(all_skills(&state.catalog.opportunities)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_list_trims_and_drops_empties() {
        assert_eq!(
            csv_list(Some("React, Figma ,,CSS")),
            vec!["React", "Figma", "CSS"]
        );
        assert!(csv_list(None).is_empty());
        assert!(csv_list(Some("")).is_empty());
    }

    #[test]
    fn test_university_query_maps_to_criteria() {
        let query = UniversityQuery {
            stream: Some(Stream::Science),
            interests: Some("Data Science,Robotics".to_string()),
            min_fee: Some(50_000),
            ..Default::default()
        };
        let criteria = query.into_criteria();
        assert_eq!(criteria.stream, Some(Stream::Science));
        assert_eq!(
            criteria.interests,
            Some(vec!["Data Science".to_string(), "Robotics".to_string()])
        );
        assert_eq!(criteria.min_fee, Some(50_000));
        assert!(criteria.course.is_none());
    }
}
