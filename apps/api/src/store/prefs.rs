//! Typed operations over the five preference keys. Each operation is a
//! read-modify-write of one whole JSON array; a mutex serializes mutations
//! so concurrent toggles cannot interleave.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::search::SearchFilters;
use crate::models::user::FileUpload;
use crate::store::KvStore;

pub const FAVORITE_OPPORTUNITIES: &str = "favoriteOpportunities";
pub const APPLIED_OPPORTUNITIES: &str = "appliedOpportunities";
pub const SAVED_FILTERS: &str = "savedFilters";
pub const RECENT_SEARCHES: &str = "recentSearches";
pub const UPLOADED_FILES: &str = "uploadedFiles";

/// Recent searches keep at most this many entries, newest first.
const RECENT_SEARCH_CAP: usize = 5;

/// A named snapshot of opportunity search state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFilter {
    pub name: String,
    pub filters: SearchFilters,
}

impl SavedFilter {
    /// Derives a display name from the active filters, the way the portal
    /// labels saved searches: types win, then the first skill, and any
    /// search term is prefixed in quotes.
    pub fn named(filters: SearchFilters) -> Self {
        let mut name = if !filters.types.is_empty() {
            filters
                .types
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        } else if !filters.skills.is_empty() {
            if filters.skills.len() > 1 {
                format!("{} +{} more", filters.skills[0], filters.skills.len() - 1)
            } else {
                filters.skills[0].clone()
            }
        } else {
            "Saved Filter".to_string()
        };

        if let Some(term) = filters.search_term.as_deref().filter(|t| !t.is_empty()) {
            name = format!("\"{term}\" - {name}");
        }

        SavedFilter { name, filters }
    }
}

#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn KvStore>,
    write_lock: Arc<Mutex<()>>,
}

impl Preferences {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn mutate(&self) -> Result<std::sync::MutexGuard<'_, ()>, AppError> {
        self.write_lock
            .lock()
            .map_err(|_| AppError::Store("preference lock poisoned".to_string()))
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        match self.store.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| AppError::Store(format!("corrupt '{key}' entry: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let value = serde_json::to_value(items)
            .map_err(|e| AppError::Store(format!("cannot encode '{key}' entry: {e}")))?;
        self.store.set(key, value)
    }

    pub fn favorites(&self) -> Result<Vec<String>, AppError> {
        self.read_list(FAVORITE_OPPORTUNITIES)
    }

    /// Adds or removes an id. Returns whether the id is a favorite after
    /// the call; toggling twice restores the original set.
    pub fn toggle_favorite(&self, id: &str) -> Result<bool, AppError> {
        let _guard = self.mutate()?;
        let mut favorites = self.favorites()?;
        let favorited = if let Some(pos) = favorites.iter().position(|f| f == id) {
            favorites.remove(pos);
            false
        } else {
            favorites.push(id.to_string());
            true
        };
        self.write_list(FAVORITE_OPPORTUNITIES, &favorites)?;
        Ok(favorited)
    }

    pub fn applied(&self) -> Result<Vec<String>, AppError> {
        self.read_list(APPLIED_OPPORTUNITIES)
    }

    /// Records an application. Returns false (and changes nothing) when
    /// the id was already recorded.
    pub fn mark_applied(&self, id: &str) -> Result<bool, AppError> {
        let _guard = self.mutate()?;
        let mut applied = self.applied()?;
        if applied.iter().any(|a| a == id) {
            return Ok(false);
        }
        applied.push(id.to_string());
        self.write_list(APPLIED_OPPORTUNITIES, &applied)?;
        Ok(true)
    }

    pub fn saved_filters(&self) -> Result<Vec<SavedFilter>, AppError> {
        self.read_list(SAVED_FILTERS)
    }

    pub fn save_filter(&self, filters: SearchFilters) -> Result<SavedFilter, AppError> {
        let _guard = self.mutate()?;
        let saved = SavedFilter::named(filters);
        let mut all = self.saved_filters()?;
        all.push(saved.clone());
        self.write_list(SAVED_FILTERS, &all)?;
        Ok(saved)
    }

    /// Deletes by position in the current list.
    pub fn delete_filter(&self, index: usize) -> Result<(), AppError> {
        let _guard = self.mutate()?;
        let mut all = self.saved_filters()?;
        if index >= all.len() {
            return Err(AppError::NotFound(format!("no saved filter at {index}")));
        }
        all.remove(index);
        self.write_list(SAVED_FILTERS, &all)
    }

    pub fn recent_searches(&self) -> Result<Vec<String>, AppError> {
        self.read_list(RECENT_SEARCHES)
    }

    /// Pushes a term to the front of the recent list. Blank terms and
    /// terms already present are ignored; the list is capped at
    /// `RECENT_SEARCH_CAP`.
    pub fn record_search(&self, term: &str) -> Result<(), AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(());
        }
        let _guard = self.mutate()?;
        let mut searches = self.recent_searches()?;
        if searches.iter().any(|s| s == term) {
            return Ok(());
        }
        searches.insert(0, term.to_string());
        searches.truncate(RECENT_SEARCH_CAP);
        self.write_list(RECENT_SEARCHES, &searches)
    }

    pub fn clear_searches(&self) -> Result<(), AppError> {
        let _guard = self.mutate()?;
        self.write_list::<String>(RECENT_SEARCHES, &[])
    }

    pub fn uploaded_files(&self) -> Result<Vec<FileUpload>, AppError> {
        self.read_list(UPLOADED_FILES)
    }

    pub fn add_uploaded_file(&self, file: FileUpload) -> Result<(), AppError> {
        let _guard = self.mutate()?;
        let mut files = self.uploaded_files()?;
        files.push(file);
        self.write_list(UPLOADED_FILES, &files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::opportunity::OpportunityType;
    use crate::store::MemoryStore;

    fn prefs() -> Preferences {
        Preferences::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_favorite_toggle_is_idempotent_under_double_invocation() {
        let prefs = prefs();
        assert!(prefs.toggle_favorite("2").unwrap());
        assert_eq!(prefs.favorites().unwrap(), vec!["2"]);

        assert!(!prefs.toggle_favorite("2").unwrap());
        assert!(prefs.favorites().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_keeps_other_favorites() {
        let prefs = prefs();
        prefs.toggle_favorite("1").unwrap();
        prefs.toggle_favorite("4").unwrap();
        prefs.toggle_favorite("1").unwrap();
        assert_eq!(prefs.favorites().unwrap(), vec!["4"]);
    }

    #[test]
    fn test_mark_applied_is_a_noop_when_already_applied() {
        let prefs = prefs();
        assert!(prefs.mark_applied("3").unwrap());
        assert!(!prefs.mark_applied("3").unwrap());
        assert_eq!(prefs.applied().unwrap(), vec!["3"]);
    }

    #[test]
    fn test_saved_filter_round_trips_equal() {
        let prefs = prefs();
        let filters = SearchFilters {
            types: vec![OpportunityType::Internship],
            remote: true,
            skills: vec!["React".to_string()],
            search_term: Some("frontend".to_string()),
        };
        let saved = prefs.save_filter(filters.clone()).unwrap();
        let reloaded = prefs.saved_filters().unwrap();
        assert_eq!(reloaded, vec![saved]);
        assert_eq!(reloaded[0].filters, filters);
    }

    #[test]
    fn test_filter_names_follow_portal_labels() {
        let types = SavedFilter::named(SearchFilters {
            types: vec![OpportunityType::Internship, OpportunityType::Project],
            ..Default::default()
        });
        assert_eq!(types.name, "internship, project");

        let skills = SavedFilter::named(SearchFilters {
            skills: vec!["React".to_string(), "Figma".to_string(), "CSS".to_string()],
            ..Default::default()
        });
        assert_eq!(skills.name, "React +2 more");

        let with_term = SavedFilter::named(SearchFilters {
            search_term: Some("remote".to_string()),
            ..Default::default()
        });
        assert_eq!(with_term.name, "\"remote\" - Saved Filter");
    }

    #[test]
    fn test_delete_filter_by_index() {
        let prefs = prefs();
        prefs.save_filter(SearchFilters::default()).unwrap();
        prefs
            .save_filter(SearchFilters {
                remote: true,
                ..Default::default()
            })
            .unwrap();

        prefs.delete_filter(0).unwrap();
        let remaining = prefs.saved_filters().unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining[0].filters.remote);

        assert!(matches!(
            prefs.delete_filter(5),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_recent_searches_dedupe_and_cap() {
        let prefs = prefs();
        for term in ["react", "python", "react", "design", "sql", "go", "rust"] {
            prefs.record_search(term).unwrap();
        }
        // "react" recorded once; newest first; capped at five.
        assert_eq!(
            prefs.recent_searches().unwrap(),
            vec!["rust", "go", "sql", "design", "python"]
        );
    }

    #[test]
    fn test_blank_search_terms_are_ignored() {
        let prefs = prefs();
        prefs.record_search("   ").unwrap();
        assert!(prefs.recent_searches().unwrap().is_empty());
    }

    #[test]
    fn test_clear_searches() {
        let prefs = prefs();
        prefs.record_search("react").unwrap();
        prefs.clear_searches().unwrap();
        assert!(prefs.recent_searches().unwrap().is_empty());
    }

    #[test]
    fn test_uploaded_files_append() {
        let prefs = prefs();
        prefs
            .add_uploaded_file(FileUpload {
                id: "file-a".to_string(),
                filename: "resume.pdf".to_string(),
                upload_date: "2023-04-05".to_string(),
                file_type: "application/pdf".to_string(),
                size: "1.2 MB".to_string(),
            })
            .unwrap();
        let files = prefs.uploaded_files().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "resume.pdf");
    }
}
