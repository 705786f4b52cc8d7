//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the workflow to external systems:
//! - `ai` - completion providers (OpenAI HTTP client, scripted mock)
//! - `search` - hybrid search clients (HTTP service, in-memory double)
//! - `trace` - diagnostics sinks (tracing-backed, in-memory double)

pub mod ai;
pub mod search;
pub mod trace;
