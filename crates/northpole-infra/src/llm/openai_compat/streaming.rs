//! OpenAI SSE stream to [`ChatChunk`] adapter.
//!
//! Every SSE chunk maps to exactly one [`ChatChunk`], including chunks that
//! carry no text (the role-only opener, the finish marker). Callers rely on
//! that one-to-one shape.

use futures_util::StreamExt;

use async_openai::types::chat::{ChatCompletionResponseStream, CreateChatCompletionStreamResponse};

use northpole_core::llm::provider::ChunkStream;
use northpole_types::llm::ChatChunk;

use super::map_openai_error;

/// Map an async-openai [`ChatCompletionResponseStream`] to a [`ChunkStream`].
///
/// HTTP failures arrive as the first stream item and are classified like
/// any other provider error.
pub fn map_openai_stream(stream: ChatCompletionResponseStream) -> ChunkStream {
    Box::pin(async_stream::try_stream! {
        let mut stream = stream;
        while let Some(result) = stream.next().await {
            let chunk = result.map_err(map_openai_error)?;
            yield map_chunk(chunk);
        }
    })
}

/// The first choice's text delta, if any.
pub(crate) fn map_chunk(chunk: CreateChatCompletionStreamResponse) -> ChatChunk {
    ChatChunk {
        delta: chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content),
    }
}
