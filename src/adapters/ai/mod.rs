//! Completion provider adapters.

mod mock_provider;
mod openai_provider;

pub use mock_provider::MockCompletionProvider;
pub use openai_provider::{OpenAiConfig, OpenAiProvider};
