// Matching engines: stream classification, university filtering, and
// opportunity search/ranking. Everything here is pure and synchronous;
// handlers wire the results to the preference store and the ranker.

pub mod handlers;
pub mod ranking;
pub mod search;
pub mod stream;
pub mod university_filter;
