//! BoxLlmProvider -- owned dynamic dispatch wrapper for LlmProvider.

use northpole_types::llm::ChatRequest;

use super::provider::{ChunkStream, LlmProvider};

/// Type-erased LLM provider for runtime provider selection.
///
/// Lets the agent hold either vendor (or a test double) without
/// becoming generic over it.
pub struct BoxLlmProvider {
    inner: Box<dyn LlmProvider>,
}

impl BoxLlmProvider {
    /// Wrap a concrete `LlmProvider` in a type-erased box.
    pub fn new<T: LlmProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn stream(&self, request: ChatRequest) -> ChunkStream {
        self.inner.stream(request)
    }
}
