use crate::engine::filter::Query;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-facing validation errors. The only recoverable error the
/// engine reports; everything else degrades to a no-op or empty result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("search name must not be empty")]
    EmptyName,
}

/// A named query kept around for re-use and alerting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: u64,
    pub name: String,
    pub query: Query,
    pub alerts_enabled: bool,
    /// Cached count of new matches. Written back by the alerting
    /// collaborator via [`SavedSearchRegistry::set_match_count`]; the
    /// registry itself never recomputes it.
    pub match_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Most-recent-first collection of saved searches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedSearchRegistry {
    searches: Vec<SavedSearch>,
    next_id: u64,
}

impl SavedSearchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the current query under a display name. New entries start
    /// with alerts on and no cached matches, and go to the front.
    pub fn save(&mut self, name: &str, query: Query) -> Result<&SavedSearch, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.next_id += 1;
        let search = SavedSearch {
            id: self.next_id,
            name: name.trim().to_string(),
            query,
            alerts_enabled: true,
            match_count: 0,
            created_at: Utc::now(),
        };
        self.searches.insert(0, search);
        Ok(&self.searches[0])
    }

    /// Flip the alert flag; returns false for an unknown id.
    pub fn toggle_alerts(&mut self, id: u64) -> bool {
        match self.searches.iter_mut().find(|s| s.id == id) {
            Some(search) => {
                search.alerts_enabled = !search.alerts_enabled;
                true
            }
            None => false,
        }
    }

    /// Remove a saved search; returns false for an unknown id.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.searches.len();
        self.searches.retain(|s| s.id != id);
        self.searches.len() != before
    }

    /// The stored query, unchanged, ready to run through the filter again
    pub fn query(&self, id: u64) -> Option<&Query> {
        self.searches.iter().find(|s| s.id == id).map(|s| &s.query)
    }

    /// Write back a match count computed by the alerting collaborator
    pub fn set_match_count(&mut self, id: u64, count: usize) -> bool {
        match self.searches.iter_mut().find(|s| s.id == id) {
            Some(search) => {
                search.match_count = count;
                true
            }
            None => false,
        }
    }

    /// Saved searches, most recent first
    pub fn searches(&self) -> &[SavedSearch] {
        &self.searches
    }

    pub fn len(&self) -> usize {
        self.searches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        let mut registry = SavedSearchRegistry::new();
        assert_eq!(
            registry.save("", Query::default()).unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            registry.save("   ", Query::default()).unwrap_err(),
            ValidationError::EmptyName
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn new_searches_are_prepended_with_alerts_on() {
        let mut registry = SavedSearchRegistry::new();
        registry.save("Villas à Kolwezi", Query::default()).unwrap();
        let saved = registry.save("Studios à Likasi", Query::default()).unwrap();
        assert!(saved.alerts_enabled);
        assert_eq!(saved.match_count, 0);

        let names: Vec<_> = registry.searches().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Studios à Likasi", "Villas à Kolwezi"]);
    }

    #[test]
    fn toggle_and_delete_report_unknown_ids() {
        let mut registry = SavedSearchRegistry::new();
        let id = registry.save("Test", Query::default()).unwrap().id;

        assert!(registry.toggle_alerts(id));
        assert!(!registry.searches()[0].alerts_enabled);
        assert!(!registry.toggle_alerts(999));

        assert!(registry.delete(id));
        assert!(!registry.delete(id));
    }

    #[test]
    fn stored_query_round_trips_unchanged() {
        let mut registry = SavedSearchRegistry::new();
        let query = Query {
            location: "Golf".into(),
            price_min: 600_000,
            price_max: 1_500_000,
            ..Query::default()
        };
        let id = registry.save("Golf", query.clone()).unwrap().id;
        assert_eq!(registry.query(id), Some(&query));
        assert_eq!(registry.query(404), None);
    }

    #[test]
    fn match_count_is_written_back_not_recomputed() {
        let mut registry = SavedSearchRegistry::new();
        let id = registry.save("Test", Query::default()).unwrap().id;
        assert!(registry.set_match_count(id, 3));
        assert_eq!(registry.searches()[0].match_count, 3);
        assert!(!registry.set_match_count(999, 1));
    }
}
