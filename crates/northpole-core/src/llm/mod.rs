//! LLM provider abstractions.
//!
//! - `LlmProvider`: trait for concrete streaming chat providers
//! - `BoxLlmProvider`: owned, type-erased provider for runtime selection

pub mod box_provider;
pub mod provider;
