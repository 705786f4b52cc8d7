//! Loan Advisor - Routing RAG pipeline for loan product questions
//!
//! This crate answers a user question either directly or by first retrieving
//! supporting product documents through an external hybrid-search service.
//! A classifier decides the route, retrieval runs only on the search route,
//! and a synthesizer produces the final answer from the accumulated state.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
