// Seed catalogs. Every entity is constructed once at startup and never
// mutated; preference lists reference entries by id only.

pub mod handlers;
pub mod opportunities;
pub mod universities;

use crate::models::opportunity::Opportunity;
use crate::models::university::{Stream, University};
use crate::models::user::User;

/// The full seed dataset, built once in `main` and shared via `AppState`.
pub struct Catalog {
    pub universities: Vec<University>,
    pub opportunities: Vec<Opportunity>,
    pub users: Vec<User>,
}

impl Catalog {
    pub fn seed() -> Self {
        Self {
            universities: universities::seed(),
            opportunities: opportunities::seed(),
            users: opportunities::seed_users(),
        }
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// Interest options offered to a student after stream classification.
pub fn interests_for_stream(stream: Stream) -> &'static [&'static str] {
    match stream {
        Stream::Science => &[
            "Computer Science",
            "Mechanical Engineering",
            "Electrical Engineering",
            "Civil Engineering",
            "Chemical Engineering",
            "Biotechnology",
            "Aerospace Engineering",
            "Data Science",
            "Artificial Intelligence",
        ],
        Stream::Commerce => &[
            "Accounting",
            "Business Administration",
            "Finance",
            "Marketing",
            "Economics",
            "Human Resources",
        ],
        Stream::Arts => &[
            "Literature",
            "Fine Arts",
            "Psychology",
            "Sociology",
            "Political Science",
            "History",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.universities.len(), 12);
        assert_eq!(catalog.opportunities.len(), 5);
        assert_eq!(catalog.users.len(), 2);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = Catalog::seed();
        let mut uni_ids: Vec<_> = catalog.universities.iter().map(|u| &u.id).collect();
        uni_ids.sort();
        uni_ids.dedup();
        assert_eq!(uni_ids.len(), catalog.universities.len());

        let mut opp_ids: Vec<_> = catalog.opportunities.iter().map(|o| &o.id).collect();
        opp_ids.sort();
        opp_ids.dedup();
        assert_eq!(opp_ids.len(), catalog.opportunities.len());
    }

    #[test]
    fn test_every_university_offers_at_least_one_stream_and_course() {
        for uni in Catalog::seed().universities {
            assert!(!uni.streams.is_empty(), "{} has no streams", uni.name);
            assert!(!uni.courses.is_empty(), "{} has no courses", uni.name);
            assert!(uni.fees.min <= uni.fees.max, "{} fee bounds inverted", uni.name);
        }
    }

    #[test]
    fn test_every_stream_has_interest_options() {
        for stream in [Stream::Science, Stream::Commerce, Stream::Arts] {
            assert!(!interests_for_stream(stream).is_empty());
        }
    }

    #[test]
    fn test_user_lookup() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.user_by_id("1").unwrap().name, "Alex Johnson");
        assert!(catalog.user_by_id("999").is_none());
    }
}
