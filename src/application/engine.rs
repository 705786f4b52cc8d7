//! Workflow engine - sequences the pipeline stages.
//!
//! Always classifies, conditionally retrieves, always synthesizes. The
//! state is threaded by value through every stage and each advance is
//! validated against the stage machine, so an out-of-order transition is
//! a programming error surfaced as a validation failure rather than a
//! silent corruption.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::{RouteDecision, ValidationError, WorkflowStage, WorkflowState};
use crate::ports::{
    CompletionError, CompletionProvider, DocumentSearch, SearchError, TraceEvent, TraceSink,
};

use super::classifier::IntentClassifier;
use super::retriever::RetrieverAdapter;
use super::synthesizer::AnswerSynthesizer;

/// Terminal failure of a single workflow run.
///
/// Collaborator failures pass through unmodified; the engine performs no
/// retry or local recovery, and a failed run produces no answer.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The completion provider failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The search service failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The input or a stage transition was invalid.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Runs the classify -> (retrieve) -> synthesize pipeline.
pub struct WorkflowEngine {
    classifier: IntentClassifier,
    retriever: RetrieverAdapter,
    synthesizer: AnswerSynthesizer,
    trace: Arc<dyn TraceSink>,
}

impl WorkflowEngine {
    /// Wires the three stages onto shared collaborators.
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        search: Arc<dyn DocumentSearch>,
        trace: Arc<dyn TraceSink>,
        top_k: usize,
    ) -> Self {
        Self {
            classifier: IntentClassifier::new(provider.clone(), trace.clone()),
            retriever: RetrieverAdapter::new(search, trace.clone(), top_k),
            synthesizer: AnswerSynthesizer::new(provider, trace.clone()),
            trace,
        }
    }

    /// Executes one full run and returns the final state with the answer
    /// populated.
    ///
    /// # Errors
    ///
    /// Fails with the first collaborator error; no partial result is
    /// returned.
    pub async fn run(
        &self,
        question: &str,
        diagnostics_enabled: bool,
    ) -> Result<WorkflowState, WorkflowError> {
        let state = WorkflowState::new(question, diagnostics_enabled)?;
        let diagnostics = state.diagnostics_enabled();

        let decision = self.classifier.classify(state.question(), diagnostics).await?;
        let state = self.advance(
            state.with_decision(decision),
            WorkflowStage::Classified,
        )?;

        let state = match decision {
            RouteDecision::Search => {
                let state = self.advance(state, WorkflowStage::RetrievalPending)?;
                let documents = self.retriever.retrieve(state.question(), diagnostics).await?;
                self.advance(state.with_documents(documents), WorkflowStage::Retrieved)?
            }
            RouteDecision::Direct => self.advance(state, WorkflowStage::RetrievalSkipped)?,
        };

        let answer = self
            .synthesizer
            .synthesize(state.question(), decision, state.documents(), diagnostics)
            .await?;
        let state = self.advance(state.with_answer(answer), WorkflowStage::Answered)?;

        Ok(self.advance(state, WorkflowStage::Done)?)
    }

    fn advance(
        &self,
        state: WorkflowState,
        to: WorkflowStage,
    ) -> Result<WorkflowState, ValidationError> {
        let state = state.advance(to)?;
        if state.diagnostics_enabled() {
            self.trace.record(TraceEvent::StageEntered { stage: to });
        }
        Ok(state)
    }
}
