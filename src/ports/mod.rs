//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the workflow and the outside world. Adapters implement these ports.
//!
//! - `CompletionProvider` - the opaque text-completion function
//! - `DocumentSearch` - the external hybrid search service
//! - `TraceSink` - the injectable diagnostics capability

mod completion;
mod search;
mod trace;

pub use completion::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse, Message,
    MessageRole,
};
pub use search::{DocumentSearch, SearchError};
pub use trace::{TraceEvent, TraceSink};
