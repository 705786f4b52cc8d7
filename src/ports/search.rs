//! Document search port - Interface for the hybrid search service.
//!
//! The service returns ranked documents with relevance scores. Ordering is
//! the service's own fused ranking and callers must preserve it. An empty
//! result is a valid outcome, not an error.

use async_trait::async_trait;

use crate::domain::DocumentRecord;

/// Port for the external hybrid search collaborator.
#[async_trait]
pub trait DocumentSearch: Send + Sync {
    /// Searches for documents matching the query, up to `limit` results.
    async fn search(&self, query: &str, limit: usize)
        -> Result<Vec<DocumentRecord>, SearchError>;
}

/// Search service errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// The search service failed the request.
    #[error("search upstream error {status}: {message}")]
    Upstream {
        /// HTTP status from the service.
        status: u16,
        /// Error details.
        message: String,
    },

    /// Network error during the request.
    #[error("search network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("search request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Failed to parse the service response.
    #[error("search parse error: {0}")]
    Parse(String),
}

impl SearchError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an upstream error.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}
