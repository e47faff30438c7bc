//! Opportunity search: free-text query plus facet intersection, with four
//! deterministic sort keys. OR within a facet, AND across facets.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::opportunity::{Opportunity, OpportunityType};

/// Active search state. This is also the snapshot persisted by the
/// saved-filters preference key, so the wire names match the stored blobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub types: Vec<OpportunityType>,
    pub remote: bool,
    pub skills: Vec<String>,
    pub search_term: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && !self.remote
            && self.skills.is_empty()
            && self.search_term.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Match percentage, descending.
    #[default]
    Match,
    /// Posted date, newest first; undated entries last.
    Recent,
    /// Application deadline, soonest first; unparseable dates last.
    Deadline,
    /// Favorites first, otherwise stable.
    Favorites,
}

fn matches_filters(opp: &Opportunity, filters: &SearchFilters) -> bool {
    if let Some(term) = filters.search_term.as_deref().filter(|t| !t.is_empty()) {
        let term = term.to_lowercase();
        let hit = opp.title.to_lowercase().contains(&term)
            || opp.company.to_lowercase().contains(&term)
            || opp.description.to_lowercase().contains(&term)
            || opp
                .required_skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&term));
        if !hit {
            return false;
        }
    }

    if !filters.types.is_empty() && !filters.types.contains(&opp.kind) {
        return false;
    }

    if filters.remote && !opp.remote {
        return false;
    }

    if !filters.skills.is_empty()
        && !filters
            .skills
            .iter()
            .any(|skill| opp.required_skills.contains(skill))
    {
        return false;
    }

    true
}

/// Filters the catalog by the active search state, preserving input order.
pub fn search_opportunities(
    opportunities: &[Opportunity],
    filters: &SearchFilters,
) -> Vec<Opportunity> {
    opportunities
        .iter()
        .filter(|opp| matches_filters(opp, filters))
        .cloned()
        .collect()
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

// Present dates compare among themselves; absent ones sink to the end.
fn cmp_dated(a: Option<NaiveDate>, b: Option<NaiveDate>, newest_first: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if newest_first {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts in place. All keys use a stable sort, so equal entries keep their
/// catalog order.
pub fn sort_opportunities(results: &mut [Opportunity], key: SortKey, favorites: &[String]) {
    match key {
        SortKey::Match => {
            results.sort_by(|a, b| {
                b.match_percentage
                    .unwrap_or(0)
                    .cmp(&a.match_percentage.unwrap_or(0))
            });
        }
        SortKey::Recent => {
            results.sort_by(|a, b| {
                cmp_dated(
                    a.posted_date.as_deref().and_then(parse_date),
                    b.posted_date.as_deref().and_then(parse_date),
                    true,
                )
            });
        }
        SortKey::Deadline => {
            results.sort_by(|a, b| {
                cmp_dated(parse_date(&a.deadline), parse_date(&b.deadline), false)
            });
        }
        SortKey::Favorites => {
            results.sort_by_key(|opp| !favorites.contains(&opp.id));
        }
    }
}

/// Distinct skill names across the catalog, first-seen order. Drives the
/// skills facet options.
pub fn all_skills(opportunities: &[Opportunity]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for opp in opportunities {
        for skill in &opp.required_skills {
            if !seen.contains(skill) {
                seen.push(skill.clone());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn seed() -> Vec<Opportunity> {
        catalog::opportunities::seed()
    }

    fn ids(results: &[Opportunity]) -> Vec<&str> {
        results.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_query_matches_title_company_description_and_skills() {
        let opps = seed();

        let by_title = search_opportunities(
            &opps,
            &SearchFilters {
                search_term: Some("frontend".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ids(&by_title), vec!["1"]);

        let by_company = search_opportunities(
            &opps,
            &SearchFilters {
                search_term: Some("designhub".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ids(&by_company), vec!["2"]);

        let by_description = search_opportunities(
            &opps,
            &SearchFilters {
                search_term: Some("conservation".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ids(&by_description), vec!["3"]);

        let by_skill = search_opportunities(
            &opps,
            &SearchFilters {
                search_term: Some("mongodb".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ids(&by_skill), vec!["5"]);
    }

    #[test]
    fn test_types_facet_is_or_within() {
        let results = search_opportunities(
            &seed(),
            &SearchFilters {
                types: vec![OpportunityType::Volunteer, OpportunityType::Freelance],
                ..Default::default()
            },
        );
        assert_eq!(ids(&results), vec!["3", "4"]);
    }

    #[test]
    fn test_skills_facet_uses_exact_membership() {
        let results = search_opportunities(
            &seed(),
            &SearchFilters {
                skills: vec!["JavaScript".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(ids(&results), vec!["1", "4"]);

        // Facet selection is exact, unlike the free-text query.
        let none = search_opportunities(
            &seed(),
            &SearchFilters {
                skills: vec!["Java".to_string()],
                ..Default::default()
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_facets_intersect() {
        let results = search_opportunities(
            &seed(),
            &SearchFilters {
                types: vec![OpportunityType::Internship],
                remote: true,
                ..Default::default()
            },
        );
        assert_eq!(ids(&results), vec!["1"]);
    }

    #[test]
    fn test_empty_filters_return_everything() {
        let opps = seed();
        let results = search_opportunities(&opps, &SearchFilters::default());
        assert_eq!(results.len(), opps.len());
    }

    #[test]
    fn test_sort_by_match_descending() {
        let mut results = seed();
        let scores = [72u8, 95, 60, 88, 95];
        for (opp, score) in results.iter_mut().zip(scores) {
            opp.match_percentage = Some(score);
        }
        sort_opportunities(&mut results, SortKey::Match, &[]);
        // Stable: ids 2 and 5 both score 95, catalog order kept.
        assert_eq!(ids(&results), vec!["2", "5", "4", "1", "3"]);
    }

    #[test]
    fn test_sort_by_recent_newest_first_undated_last() {
        let mut results = seed();
        results[2].posted_date = None; // id 3
        sort_opportunities(&mut results, SortKey::Recent, &[]);
        assert_eq!(ids(&results), vec!["4", "1", "2", "5", "3"]);
    }

    #[test]
    fn test_sort_by_deadline_soonest_first() {
        let mut results = seed();
        sort_opportunities(&mut results, SortKey::Deadline, &[]);
        assert_eq!(ids(&results), vec!["4", "1", "2", "5", "3"]);
    }

    #[test]
    fn test_sort_by_deadline_puts_unparseable_last() {
        let mut results = seed();
        results[0].deadline = "soon".to_string(); // id 1
        sort_opportunities(&mut results, SortKey::Deadline, &[]);
        assert_eq!(ids(&results).last(), Some(&"1"));
    }

    #[test]
    fn test_sort_by_favorites_is_stable_partition() {
        let mut results = seed();
        let favorites = vec!["3".to_string(), "5".to_string()];
        sort_opportunities(&mut results, SortKey::Favorites, &favorites);
        // Favorites keep their relative order, as do the rest.
        assert_eq!(ids(&results), vec!["3", "5", "1", "2", "4"]);
    }

    #[test]
    fn test_all_skills_deduplicates_in_first_seen_order() {
        let skills = all_skills(&seed());
        assert_eq!(skills[0], "React");
        assert!(skills.contains(&"JavaScript".to_string()));
        let js_count = skills.iter().filter(|s| *s == "JavaScript").count();
        assert_eq!(js_count, 1);
    }
}
