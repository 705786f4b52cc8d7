//! Trace sink backed by the `tracing` facade.
//!
//! Events land on the `workflow` target at debug level, so the CLI's
//! `--debug` flag (or `RUST_LOG=workflow=debug`) makes them visible
//! without mixing diagnostics into user-facing output.

use crate::ports::{TraceEvent, TraceSink};

/// Forwards trace events to `tracing::debug!`.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl TraceSink for TracingSink {
    fn record(&self, event: TraceEvent) {
        match event {
            TraceEvent::StageEntered { stage } => {
                tracing::debug!(target: "workflow", ?stage, "stage entered");
            }
            TraceEvent::DecisionResolved { decision } => {
                tracing::debug!(target: "workflow", %decision, "route decision resolved");
            }
            TraceEvent::DocumentsRetrieved { count } => {
                tracing::debug!(target: "workflow", count, "documents retrieved");
            }
            TraceEvent::DocumentHit {
                rank,
                product_name,
                relevance_score,
            } => {
                tracing::debug!(
                    target: "workflow",
                    rank,
                    %product_name,
                    relevance_score,
                    "document hit"
                );
            }
            TraceEvent::AnswerGenerated { chars } => {
                tracing::debug!(target: "workflow", chars, "answer generated");
            }
        }
    }
}
