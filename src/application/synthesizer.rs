//! Answer synthesizer - final stage of the pipeline.
//!
//! Branches on the routing decision: direct questions get a brief-answer
//! prompt, search questions get a grounded template over the formatted
//! document context. A search route with zero documents short-circuits to
//! a fixed apology without any completion call.

use std::sync::Arc;

use crate::domain::{format_context, DocumentRecord, RouteDecision};
use crate::ports::{
    CompletionError, CompletionProvider, CompletionRequest, MessageRole, TraceEvent, TraceSink,
};

use super::prompts::{
    grounded_user_prompt, DIRECT_SYSTEM_PROMPT, GROUNDED_SYSTEM_PROMPT, NO_RESULTS_ANSWER,
};

/// Produces the final answer from the accumulated workflow state.
pub struct AnswerSynthesizer {
    provider: Arc<dyn CompletionProvider>,
    trace: Arc<dyn TraceSink>,
}

impl AnswerSynthesizer {
    pub fn new(provider: Arc<dyn CompletionProvider>, trace: Arc<dyn TraceSink>) -> Self {
        Self { provider, trace }
    }

    /// Synthesizes the answer text for the resolved decision.
    ///
    /// Replies are returned verbatim; citation compliance is a prompt-level
    /// contract and is not re-validated here.
    ///
    /// # Errors
    ///
    /// Propagates the provider failure unmodified.
    pub async fn synthesize(
        &self,
        question: &str,
        decision: RouteDecision,
        documents: &[DocumentRecord],
        diagnostics: bool,
    ) -> Result<String, CompletionError> {
        let answer = match decision {
            RouteDecision::Direct => self.answer_direct(question).await?,
            RouteDecision::Search if documents.is_empty() => NO_RESULTS_ANSWER.to_string(),
            RouteDecision::Search => self.answer_grounded(question, documents).await?,
        };

        if diagnostics {
            self.trace.record(TraceEvent::AnswerGenerated {
                chars: answer.chars().count(),
            });
        }

        Ok(answer)
    }

    async fn answer_direct(&self, question: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest::new()
            .with_message(MessageRole::System, DIRECT_SYSTEM_PROMPT)
            .with_message(MessageRole::User, question);

        let response = self.provider.complete(request).await?;
        Ok(response.content)
    }

    async fn answer_grounded(
        &self,
        question: &str,
        documents: &[DocumentRecord],
    ) -> Result<String, CompletionError> {
        let context = format_context(documents);
        let request = CompletionRequest::new()
            .with_message(MessageRole::System, GROUNDED_SYSTEM_PROMPT)
            .with_message(MessageRole::User, grounded_user_prompt(&context, question));

        let response = self.provider.complete(request).await?;
        Ok(response.content)
    }
}
