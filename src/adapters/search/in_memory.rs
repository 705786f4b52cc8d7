//! In-memory search double for testing.
//!
//! Serves canned results, injects errors, and records every query so tests
//! can assert the retriever was (or was not) invoked and with what limit.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::DocumentRecord;
use crate::ports::{DocumentSearch, SearchError};

/// Canned hybrid search for tests.
///
/// Clones share the same results and call history.
#[derive(Debug, Clone, Default)]
pub struct InMemorySearch {
    results: Arc<Mutex<Vec<DocumentRecord>>>,
    error: Arc<Mutex<Option<SearchError>>>,
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl InMemorySearch {
    /// Creates a search double that returns no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the results returned by every search, in this order.
    pub fn with_results(self, results: Vec<DocumentRecord>) -> Self {
        *self.results.lock().unwrap() = results;
        self
    }

    /// Makes every search fail with the given error.
    pub fn with_error(self, error: SearchError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Number of searches made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded (query, limit) pairs, in call order.
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentSearch for InMemorySearch {
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<DocumentRecord>, SearchError> {
        self.calls.lock().unwrap().push((query.to_string(), limit));

        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }

        let results = self.results.lock().unwrap();
        Ok(results.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> DocumentRecord {
        DocumentRecord {
            product_name: name.to_string(),
            product_code: "P1".to_string(),
            product_summary: "summary".to_string(),
            target_description: None,
            loan_limit_description: None,
            relevance_score: 0.1,
        }
    }

    #[tokio::test]
    async fn returns_canned_results_up_to_limit() {
        let search =
            InMemorySearch::new().with_results(vec![doc("A"), doc("B"), doc("C"), doc("D")]);

        let results = search.search("q", 3).await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].product_name, "A");
    }

    #[tokio::test]
    async fn records_queries_shared_across_clones() {
        let search = InMemorySearch::new();
        let clone = search.clone();

        clone.search("doctor loans", 3).await.unwrap();

        assert_eq!(search.calls(), vec![("doctor loans".to_string(), 3)]);
    }

    #[tokio::test]
    async fn injected_error_fails_every_search() {
        let search = InMemorySearch::new().with_error(SearchError::network("down"));

        assert!(search.search("q", 3).await.is_err());
        assert!(search.search("q", 3).await.is_err());
        assert_eq!(search.call_count(), 2);
    }
}
