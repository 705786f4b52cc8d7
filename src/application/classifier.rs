//! Intent classifier - first stage of the pipeline.
//!
//! Sends the raw question to the completion provider with a fixed
//! instruction and normalizes the free-text reply into a routing decision.

use std::sync::Arc;

use crate::domain::RouteDecision;
use crate::ports::{
    CompletionError, CompletionProvider, CompletionRequest, MessageRole, TraceEvent, TraceSink,
};

use super::prompts::CLASSIFIER_SYSTEM_PROMPT;

/// Classifies a question as needing a product search or a direct answer.
pub struct IntentClassifier {
    provider: Arc<dyn CompletionProvider>,
    trace: Arc<dyn TraceSink>,
}

impl IntentClassifier {
    pub fn new(provider: Arc<dyn CompletionProvider>, trace: Arc<dyn TraceSink>) -> Self {
        Self { provider, trace }
    }

    /// Resolves the routing decision for a question.
    ///
    /// The reply is trimmed and lowercased, then matched by substring
    /// containment: anything mentioning "search" routes to retrieval,
    /// everything else falls back to the direct path. The containment
    /// match is a deliberate fail-safe for verbose or malformed model
    /// replies; do not tighten it to an equality check.
    ///
    /// # Errors
    ///
    /// Propagates the provider failure unmodified.
    pub async fn classify(
        &self,
        question: &str,
        diagnostics: bool,
    ) -> Result<RouteDecision, CompletionError> {
        let request = CompletionRequest::new()
            .with_message(MessageRole::System, CLASSIFIER_SYSTEM_PROMPT)
            .with_message(MessageRole::User, question);

        let response = self.provider.complete(request).await?;
        let normalized = response.content.trim().to_lowercase();

        let decision = if normalized.contains("search") {
            RouteDecision::Search
        } else {
            RouteDecision::Direct
        };

        if diagnostics {
            self.trace.record(TraceEvent::DecisionResolved { decision });
        }

        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockCompletionProvider;
    use crate::adapters::trace::InMemoryTraceSink;

    fn build(provider: MockCompletionProvider) -> (IntentClassifier, Arc<InMemoryTraceSink>) {
        let trace = Arc::new(InMemoryTraceSink::new());
        (
            IntentClassifier::new(Arc::new(provider), trace.clone()),
            trace,
        )
    }

    #[tokio::test]
    async fn exact_search_reply_routes_to_search() {
        let (classifier, _) = build(MockCompletionProvider::new().with_response("search"));

        let decision = classifier.classify("Doctor loans?", false).await.unwrap();

        assert_eq!(decision, RouteDecision::Search);
    }

    #[tokio::test]
    async fn verbose_reply_containing_search_still_routes_to_search() {
        let (classifier, _) = build(
            MockCompletionProvider::new()
                .with_response("I believe a SEARCH is required for this question."),
        );

        let decision = classifier.classify("Doctor loans?", false).await.unwrap();

        assert_eq!(decision, RouteDecision::Search);
    }

    #[tokio::test]
    async fn any_other_reply_falls_back_to_direct() {
        for reply in ["direct", "  Direct  ", "I am not sure", ""] {
            let (classifier, _) =
                build(MockCompletionProvider::new().with_response(reply));

            let decision = classifier.classify("Hello", false).await.unwrap();

            assert_eq!(decision, RouteDecision::Direct, "reply: {reply:?}");
        }
    }

    #[tokio::test]
    async fn sends_instruction_and_question_as_two_messages() {
        let provider = MockCompletionProvider::new().with_response("direct");
        let (classifier, _) = build(provider.clone());

        classifier.classify("Hello there", false).await.unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].messages.len(), 2);
        assert_eq!(calls[0].messages[0].role, MessageRole::System);
        assert_eq!(calls[0].messages[1].role, MessageRole::User);
        assert_eq!(calls[0].messages[1].content, "Hello there");
    }

    #[tokio::test]
    async fn emits_decision_trace_only_when_diagnostics_enabled() {
        let (classifier, trace) =
            build(MockCompletionProvider::new().with_response("search"));
        classifier.classify("q", true).await.unwrap();
        assert_eq!(
            trace.events(),
            vec![TraceEvent::DecisionResolved {
                decision: RouteDecision::Search
            }]
        );

        let (classifier, trace) =
            build(MockCompletionProvider::new().with_response("search"));
        classifier.classify("q", false).await.unwrap();
        assert!(trace.events().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let (classifier, _) = build(
            MockCompletionProvider::new()
                .with_error(CompletionError::upstream(503, "overloaded")),
        );

        let result = classifier.classify("q", false).await;

        assert!(matches!(
            result,
            Err(CompletionError::Upstream { status: 503, .. })
        ));
    }
}
