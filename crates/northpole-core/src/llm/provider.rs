//! LlmProvider trait definition.
//!
//! The one capability the agent needs from a vendor is a streaming chat
//! completion. The stream is boxed and `'static` so it can outlive the
//! borrow of the provider and be handed to both the caller and the
//! telemetry tee.

use std::pin::Pin;

use futures_util::Stream;

use northpole_types::llm::{ChatChunk, ChatRequest, LlmError};

/// Boxed stream of provider chunks.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<ChatChunk, LlmError>> + Send + 'static>>;

/// Trait for LLM provider backends (OpenAI, Mistral, test doubles).
///
/// Implementations live in northpole-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "mistral").
    fn name(&self) -> &str;

    /// Send a streaming chat completion request.
    ///
    /// Connection failures surface as the first item of the stream.
    /// One item is produced per provider chunk, in arrival order.
    fn stream(&self, request: ChatRequest) -> ChunkStream;
}
