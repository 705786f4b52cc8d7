//! Domain layer - Pure workflow types and logic.
//!
//! No provider, search, or transport knowledge lives here. The workflow
//! state, the routing decision, the stage machine, and the document context
//! formatter are all deterministic and side-effect free.

mod document;
mod errors;
mod state_machine;
mod workflow;

pub use document::{format_context, DocumentRecord, FIELD_NOT_AVAILABLE};
pub use errors::ValidationError;
pub use state_machine::StateMachine;
pub use workflow::{RouteDecision, WorkflowStage, WorkflowState};
