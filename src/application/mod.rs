//! Application layer - Pipeline stages and the workflow engine.
//!
//! This layer orchestrates the workflow over the ports; it holds no
//! transport or provider details of its own.

mod classifier;
mod engine;
mod retriever;
mod synthesizer;

pub mod prompts;

pub use classifier::IntentClassifier;
pub use engine::{WorkflowEngine, WorkflowError};
pub use retriever::{RetrieverAdapter, DEFAULT_TOP_K};
pub use synthesizer::AnswerSynthesizer;
