//! Trace sink port - Injectable diagnostics capability.
//!
//! Stages emit trace events through this port instead of writing to the
//! console directly, so tests can assert on emitted events without
//! capturing process output. Emission is gated by the workflow state's
//! diagnostics flag; sinks never see events from undiagnosed runs.

use crate::domain::{RouteDecision, WorkflowStage};

/// Port for recording side-channel trace events.
pub trait TraceSink: Send + Sync {
    /// Records one trace event.
    fn record(&self, event: TraceEvent);
}

/// A diagnostic event emitted by a pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// The workflow advanced to a new stage.
    StageEntered {
        /// Stage just entered.
        stage: WorkflowStage,
    },
    /// The classifier resolved the routing decision.
    DecisionResolved {
        /// Resolved decision.
        decision: RouteDecision,
    },
    /// The retriever finished, possibly with zero documents.
    DocumentsRetrieved {
        /// Number of documents returned.
        count: usize,
    },
    /// One retrieved document, in received order.
    DocumentHit {
        /// 1-based rank in the result list.
        rank: usize,
        /// Product name of the hit.
        product_name: String,
        /// Fused rank score reported by the search service.
        relevance_score: f64,
    },
    /// The synthesizer produced the final answer.
    AnswerGenerated {
        /// Length of the answer in characters.
        chars: usize,
    },
}
