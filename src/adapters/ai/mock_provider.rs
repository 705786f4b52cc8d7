//! Mock completion provider for testing.
//!
//! Returns pre-configured responses in order, injects errors, and records
//! every request so tests can assert exact call counts and prompt contents
//! without touching a real API.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse,
};

/// A configured mock reply.
#[derive(Debug, Clone)]
enum MockReply {
    Success(String),
    Error(CompletionError),
}

/// Scripted completion provider for tests.
///
/// Clones share the same response queue and call history.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionProvider {
    /// Creates a new mock provider with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: CompletionError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(error));
        self
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded requests, in call order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Success("Mock response".to_string()))
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.calls.lock().unwrap().push(request);

        match self.next_reply() {
            MockReply::Success(content) => Ok(CompletionResponse {
                content,
                model: "mock-model".to_string(),
            }),
            MockReply::Error(error) => Err(error),
        }
    }
}
