//! Match ranking — pluggable, trait-based scorer that annotates
//! opportunities with a relevance percentage in [60, 100].
//!
//! Default: `SeededRanker`. With a known skill profile the score is the
//! covered fraction of the opportunity's required skills mapped onto the
//! range; without one it is a seeded per-opportunity draw, so the same
//! seed always produces the same listing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::opportunity::Opportunity;

pub const MATCH_FLOOR: u8 = 60;
pub const MATCH_CEILING: u8 = 100;

/// The ranker seam. Carried in `AppState` as `Arc<dyn MatchRanker>`.
pub trait MatchRanker: Send + Sync {
    fn match_percentage(&self, opportunity: &Opportunity, user_skills: &[String]) -> u8;
}

pub struct SeededRanker {
    seed: u64,
}

impl SeededRanker {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn draw(&self, opportunity_id: &str) -> u8 {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        opportunity_id.hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(hasher.finish());
        rng.gen_range(MATCH_FLOOR..=MATCH_CEILING)
    }
}

impl MatchRanker for SeededRanker {
    fn match_percentage(&self, opportunity: &Opportunity, user_skills: &[String]) -> u8 {
        if user_skills.is_empty() || opportunity.required_skills.is_empty() {
            return self.draw(&opportunity.id);
        }

        let covered = opportunity
            .required_skills
            .iter()
            .filter(|required| {
                user_skills
                    .iter()
                    .any(|skill| skill.eq_ignore_ascii_case(required))
            })
            .count();
        let fraction = covered as f64 / opportunity.required_skills.len() as f64;

        MATCH_FLOOR + (fraction * f64::from(MATCH_CEILING - MATCH_FLOOR)).round() as u8
    }
}

/// Annotates each opportunity with its match percentage.
pub fn annotate_matches(
    opportunities: &mut [Opportunity],
    ranker: &dyn MatchRanker,
    user_skills: &[String],
) {
    for opp in opportunities {
        opp.match_percentage = Some(ranker.match_percentage(opp, user_skills));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_overlap_scores_ceiling() {
        let opps = catalog::opportunities::seed();
        let ranker = SeededRanker::new(0);
        // Opportunity 1 requires React, JavaScript, HTML, CSS.
        let score = ranker.match_percentage(
            &opps[0],
            &skills(&["react", "javascript", "html", "css"]),
        );
        assert_eq!(score, MATCH_CEILING);
    }

    #[test]
    fn test_zero_overlap_scores_floor() {
        let opps = catalog::opportunities::seed();
        let ranker = SeededRanker::new(0);
        let score = ranker.match_percentage(&opps[0], &skills(&["Cobol"]));
        assert_eq!(score, MATCH_FLOOR);
    }

    #[test]
    fn test_partial_overlap_scores_between() {
        let opps = catalog::opportunities::seed();
        let ranker = SeededRanker::new(0);
        // 2 of 4 required skills covered.
        let score = ranker.match_percentage(&opps[0], &skills(&["React", "CSS"]));
        assert_eq!(score, 80);
    }

    #[test]
    fn test_no_profile_draw_is_seed_stable() {
        let opps = catalog::opportunities::seed();
        let a = SeededRanker::new(42);
        let b = SeededRanker::new(42);
        for opp in &opps {
            assert_eq!(a.match_percentage(opp, &[]), b.match_percentage(opp, &[]));
        }
    }

    #[test]
    fn test_draw_stays_in_range() {
        let opps = catalog::opportunities::seed();
        for seed in 0..50u64 {
            let ranker = SeededRanker::new(seed);
            for opp in &opps {
                let score = ranker.match_percentage(opp, &[]);
                assert!((MATCH_FLOOR..=MATCH_CEILING).contains(&score));
            }
        }
    }

    #[test]
    fn test_annotate_fills_every_entry() {
        let mut opps = catalog::opportunities::seed();
        annotate_matches(&mut opps, &SeededRanker::new(7), &[]);
        assert!(opps.iter().all(|o| o.match_percentage.is_some()));
    }
}
