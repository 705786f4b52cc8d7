//! Workflow state and the stage machine.
//!
//! A `WorkflowState` is created once per invocation, threaded by value
//! through each pipeline stage, and discarded after the answer is read.
//! Stages never mutate a previous stage's inputs: every update consumes
//! the state and returns a new copy.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::document::DocumentRecord;
use super::errors::ValidationError;
use super::state_machine::StateMachine;

/// The classifier's binary output, gating the retrieval branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteDecision {
    /// The question needs supporting product documents.
    Search,
    /// The question can be answered without retrieval.
    Direct,
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDecision::Search => write!(f, "search"),
            RouteDecision::Direct => write!(f, "direct"),
        }
    }
}

/// Pipeline stage of a single workflow run.
///
/// A strict DAG with exactly one branch point: retrieval runs only on the
/// search route. No stage is revisited and there are no backward edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStage {
    Start,
    Classified,
    RetrievalPending,
    Retrieved,
    RetrievalSkipped,
    Answered,
    Done,
}

impl StateMachine for WorkflowStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WorkflowStage::*;
        matches!(
            (self, target),
            (Start, Classified)
                | (Classified, RetrievalPending)
                | (Classified, RetrievalSkipped)
                | (RetrievalPending, Retrieved)
                | (Retrieved, Answered)
                | (RetrievalSkipped, Answered)
                | (Answered, Done)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WorkflowStage::*;
        match self {
            Start => vec![Classified],
            Classified => vec![RetrievalPending, RetrievalSkipped],
            RetrievalPending => vec![Retrieved],
            Retrieved => vec![Answered],
            RetrievalSkipped => vec![Answered],
            Answered => vec![Done],
            Done => vec![],
        }
    }
}

/// The single entity threaded through the pipeline.
///
/// Invariants: exactly one decision is assigned per run; `documents` is
/// non-empty only on the search route; `answer` is non-empty on successful
/// completion. The engine upholds these by sequencing stage updates through
/// the validated stage machine.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    question: String,
    decision: Option<RouteDecision>,
    documents: Vec<DocumentRecord>,
    answer: Option<String>,
    diagnostics_enabled: bool,
    stage: WorkflowStage,
}

impl WorkflowState {
    /// Creates the initial state for one invocation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the question is empty or whitespace.
    pub fn new(
        question: impl Into<String>,
        diagnostics_enabled: bool,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        Ok(Self {
            question,
            decision: None,
            documents: Vec::new(),
            answer: None,
            diagnostics_enabled,
            stage: WorkflowStage::Start,
        })
    }

    /// The user question, immutable once the workflow starts.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The routing decision, absent until the classifier stage completes.
    pub fn decision(&self) -> Option<RouteDecision> {
        self.decision
    }

    /// Retrieved documents, empty until (and unless) the retriever runs.
    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    /// The final answer, absent until the synthesizer stage completes.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// Whether stages emit side-channel trace events.
    pub fn diagnostics_enabled(&self) -> bool {
        self.diagnostics_enabled
    }

    /// Current pipeline stage.
    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    /// Returns a copy with the routing decision set.
    ///
    /// Assigned exactly once per run; the stage machine rules out a second
    /// pass through the classifier.
    pub fn with_decision(mut self, decision: RouteDecision) -> Self {
        self.decision = Some(decision);
        self
    }

    /// Returns a copy with the retrieved documents, order preserved.
    pub fn with_documents(mut self, documents: Vec<DocumentRecord>) -> Self {
        self.documents = documents;
        self
    }

    /// Returns a copy with the synthesized answer.
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Advances to the target stage, validated against the stage machine.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for any edge the DAG does not declare.
    pub fn advance(mut self, to: WorkflowStage) -> Result<Self, ValidationError> {
        self.stage = self.stage.transition_to(to)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_empty_at_start_stage() {
        let state = WorkflowState::new("What loans are available?", false).unwrap();

        assert_eq!(state.question(), "What loans are available?");
        assert_eq!(state.decision(), None);
        assert!(state.documents().is_empty());
        assert_eq!(state.answer(), None);
        assert!(!state.diagnostics_enabled());
        assert_eq!(state.stage(), WorkflowStage::Start);
    }

    #[test]
    fn empty_question_is_rejected() {
        assert!(WorkflowState::new("", false).is_err());
        assert!(WorkflowState::new("   ", true).is_err());
    }

    #[test]
    fn updates_copy_forward_without_touching_prior_fields() {
        let state = WorkflowState::new("q", true).unwrap();
        let updated = state
            .clone()
            .with_decision(RouteDecision::Direct)
            .with_answer("Hello");

        // Original is untouched.
        assert_eq!(state.decision(), None);
        assert_eq!(state.answer(), None);

        assert_eq!(updated.decision(), Some(RouteDecision::Direct));
        assert_eq!(updated.answer(), Some("Hello"));
        assert_eq!(updated.question(), "q");
        assert!(updated.diagnostics_enabled());
    }

    #[test]
    fn search_route_traverses_retrieval_stages() {
        let state = WorkflowState::new("q", false).unwrap();

        let state = state
            .advance(WorkflowStage::Classified)
            .and_then(|s| s.advance(WorkflowStage::RetrievalPending))
            .and_then(|s| s.advance(WorkflowStage::Retrieved))
            .and_then(|s| s.advance(WorkflowStage::Answered))
            .and_then(|s| s.advance(WorkflowStage::Done))
            .unwrap();

        assert_eq!(state.stage(), WorkflowStage::Done);
    }

    #[test]
    fn direct_route_skips_retrieval_stages() {
        let state = WorkflowState::new("q", false).unwrap();

        let state = state
            .advance(WorkflowStage::Classified)
            .and_then(|s| s.advance(WorkflowStage::RetrievalSkipped))
            .and_then(|s| s.advance(WorkflowStage::Answered))
            .and_then(|s| s.advance(WorkflowStage::Done))
            .unwrap();

        assert_eq!(state.stage(), WorkflowStage::Done);
    }

    #[test]
    fn backward_and_skipping_edges_are_rejected() {
        let state = WorkflowState::new("q", false).unwrap();
        assert!(state.clone().advance(WorkflowStage::Answered).is_err());

        let classified = state.advance(WorkflowStage::Classified).unwrap();
        assert!(classified.clone().advance(WorkflowStage::Start).is_err());
        assert!(classified.advance(WorkflowStage::Done).is_err());
    }

    #[test]
    fn done_is_the_only_terminal_stage() {
        assert!(WorkflowStage::Done.is_terminal());
        for stage in [
            WorkflowStage::Start,
            WorkflowStage::Classified,
            WorkflowStage::RetrievalPending,
            WorkflowStage::Retrieved,
            WorkflowStage::RetrievalSkipped,
            WorkflowStage::Answered,
        ] {
            assert!(!stage.is_terminal());
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for stage in [
            WorkflowStage::Start,
            WorkflowStage::Classified,
            WorkflowStage::RetrievalPending,
            WorkflowStage::Retrieved,
            WorkflowStage::RetrievalSkipped,
            WorkflowStage::Answered,
            WorkflowStage::Done,
        ] {
            for target in stage.valid_transitions() {
                assert!(
                    stage.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    stage,
                    target
                );
            }
        }
    }

    #[test]
    fn route_decision_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RouteDecision::Search).unwrap(),
            "\"search\""
        );
        assert_eq!(
            serde_json::to_string(&RouteDecision::Direct).unwrap(),
            "\"direct\""
        );
        assert_eq!(RouteDecision::Search.to_string(), "search");
    }
}
