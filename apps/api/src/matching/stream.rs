//! Stream classifier — a keyword-count heuristic over the subject names
//! found on a marksheet.

use crate::models::university::Stream;

const SCIENCE_SUBJECTS: &[&str] = &[
    "physics",
    "chemistry",
    "biology",
    "mathematics",
    "computer science",
];

const COMMERCE_SUBJECTS: &[&str] = &[
    "accountancy",
    "business studies",
    "economics",
    "statistics",
];

const ARTS_SUBJECTS: &[&str] = &[
    "history",
    "geography",
    "political science",
    "sociology",
    "psychology",
    "literature",
];

/// Classifies a subject list into a stream by counting case-insensitive
/// exact matches against the three indicator tables. Ties resolve in the
/// priority order Science > Commerce > Arts.
///
/// A transcript with no recognized subject at all carries no signal and
/// falls back to Arts. Product has not confirmed that default; callers
/// should treat it as a placement hint, not a verdict.
pub fn determine_stream(subjects: &[String]) -> Stream {
    let lower: Vec<String> = subjects.iter().map(|s| s.to_lowercase()).collect();
    let count = |indicators: &[&str]| {
        indicators
            .iter()
            .filter(|subject| lower.iter().any(|s| s == *subject))
            .count()
    };

    let science = count(SCIENCE_SUBJECTS);
    let commerce = count(COMMERCE_SUBJECTS);
    let arts = count(ARTS_SUBJECTS);

    if science + commerce + arts == 0 {
        return Stream::Arts;
    }

    if science >= commerce && science >= arts {
        Stream::Science
    } else if commerce >= arts {
        Stream::Commerce
    } else {
        Stream::Arts
    }
}
