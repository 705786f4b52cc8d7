//! Hybrid search adapters.

mod http_client;
mod in_memory;

pub use http_client::{HttpSearchClient, HttpSearchConfig};
pub use in_memory::InMemorySearch;
