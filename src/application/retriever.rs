//! Retriever - conditional second stage of the pipeline.
//!
//! A pure pass-through to the hybrid search service: no re-ranking, no
//! re-filtering, no deduplication. The service's result order is preserved
//! as received.

use std::sync::Arc;

use crate::domain::DocumentRecord;
use crate::ports::{DocumentSearch, SearchError, TraceEvent, TraceSink};

/// Fixed number of documents requested per retrieval.
pub const DEFAULT_TOP_K: usize = 3;

/// Retrieves candidate documents for a question.
pub struct RetrieverAdapter {
    search: Arc<dyn DocumentSearch>,
    trace: Arc<dyn TraceSink>,
    top_k: usize,
}

impl RetrieverAdapter {
    pub fn new(search: Arc<dyn DocumentSearch>, trace: Arc<dyn TraceSink>, top_k: usize) -> Self {
        Self {
            search,
            trace,
            top_k,
        }
    }

    /// Runs the search with the configured result limit.
    ///
    /// Zero documents is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Propagates the search service failure unmodified.
    pub async fn retrieve(
        &self,
        question: &str,
        diagnostics: bool,
    ) -> Result<Vec<DocumentRecord>, SearchError> {
        let documents = self.search.search(question, self.top_k).await?;

        if diagnostics {
            self.trace.record(TraceEvent::DocumentsRetrieved {
                count: documents.len(),
            });
            for (i, doc) in documents.iter().enumerate() {
                self.trace.record(TraceEvent::DocumentHit {
                    rank: i + 1,
                    product_name: doc.product_name.clone(),
                    relevance_score: doc.relevance_score,
                });
            }
        }

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::search::InMemorySearch;
    use crate::adapters::trace::InMemoryTraceSink;

    fn doc(name: &str, score: f64) -> DocumentRecord {
        DocumentRecord {
            product_name: name.to_string(),
            product_code: "P1".to_string(),
            product_summary: "summary".to_string(),
            target_description: None,
            loan_limit_description: None,
            relevance_score: score,
        }
    }

    fn retriever(search: InMemorySearch) -> (RetrieverAdapter, Arc<InMemoryTraceSink>) {
        let trace = Arc::new(InMemoryTraceSink::new());
        (
            RetrieverAdapter::new(Arc::new(search), trace.clone(), DEFAULT_TOP_K),
            trace,
        )
    }

    #[tokio::test]
    async fn passes_results_through_in_received_order() {
        let results = vec![doc("First", 0.9), doc("Second", 0.5), doc("Third", 0.1)];
        let search = InMemorySearch::new().with_results(results.clone());
        let (retriever, _) = retriever(search);

        let documents = retriever.retrieve("doctor loans", false).await.unwrap();

        assert_eq!(documents, results);
    }

    #[tokio::test]
    async fn queries_with_question_and_configured_limit() {
        let search = InMemorySearch::new();
        let (retriever, _) = retriever(search.clone());

        retriever.retrieve("doctor loans", false).await.unwrap();

        assert_eq!(
            search.calls(),
            vec![("doctor loans".to_string(), DEFAULT_TOP_K)]
        );
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let (retriever, _) = retriever(InMemorySearch::new());

        let documents = retriever.retrieve("unknown product", false).await.unwrap();

        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn emits_count_and_one_hit_per_document_in_order() {
        let search =
            InMemorySearch::new().with_results(vec![doc("Alpha", 0.9), doc("Beta", 0.4)]);
        let (retriever, trace) = retriever(search);

        retriever.retrieve("q", true).await.unwrap();

        assert_eq!(
            trace.events(),
            vec![
                TraceEvent::DocumentsRetrieved { count: 2 },
                TraceEvent::DocumentHit {
                    rank: 1,
                    product_name: "Alpha".to_string(),
                    relevance_score: 0.9,
                },
                TraceEvent::DocumentHit {
                    rank: 2,
                    product_name: "Beta".to_string(),
                    relevance_score: 0.4,
                },
            ]
        );
    }

    #[tokio::test]
    async fn emits_nothing_when_diagnostics_disabled() {
        let search = InMemorySearch::new().with_results(vec![doc("Alpha", 0.9)]);
        let (retriever, trace) = retriever(search);

        retriever.retrieve("q", false).await.unwrap();

        assert!(trace.events().is_empty());
    }

    #[tokio::test]
    async fn search_failure_propagates() {
        let search = InMemorySearch::new().with_error(SearchError::upstream(500, "index offline"));
        let (retriever, _) = retriever(search);

        let result = retriever.retrieve("q", false).await;

        assert!(matches!(
            result,
            Err(SearchError::Upstream { status: 500, .. })
        ));
    }
}
