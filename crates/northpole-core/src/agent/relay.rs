//! Chat relay: persona-conditioned answer streaming with exchange logging.
//!
//! For each user turn the relay prepends the persona instruction to the
//! caller's history, opens a streaming completion, and tees the chunk stream:
//! one side goes back to the caller as text fragments, the other is submitted
//! to the telemetry backend as the exchange's output.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};
use tracing::{Instrument, debug, info_span, warn};

use northpole_types::error::AgentError;
use northpole_types::llm::{ChatChunk, ChatRequest, LlmError, Message};
use northpole_types::telemetry::{Exchange, LogMetadata, SessionId, TaskId};

use crate::llm::provider::ChunkStream;
use crate::stream::tee::{TeeStream, tee};
use crate::telemetry::LogEntry;

use super::PersonaAgent;
use super::persona::persona_instruction;

/// Streamed answer to one user turn.
///
/// Yields one item per provider chunk, in arrival order. A chunk without
/// text yields `Ok(None)`; the stream ends when the provider closes it.
pub struct AnswerStream {
    inner: TeeStream<ChunkStream, Result<ChatChunk, LlmError>>,
    exchange: Exchange,
    span: tracing::Span,
}

impl AnswerStream {
    /// Handle identifying this exchange for feedback.
    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    /// Drain the stream and concatenate its text fragments.
    pub async fn collect_text(mut self) -> Result<String, LlmError> {
        let mut text = String::new();
        while let Some(fragment) = self.next().await {
            if let Some(delta) = fragment? {
                text.push_str(&delta);
            }
        }
        Ok(text)
    }
}

impl Stream for AnswerStream {
    type Item = Result<Option<String>, LlmError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        let _enter = this.span.enter();
        Pin::new(&mut this.inner)
            .poll_next(cx)
            .map(|item| item.map(|chunk| chunk.map(|c| c.delta)))
    }
}

impl PersonaAgent {
    /// Stream a persona-conditioned reply to the newest turn of `history`
    /// and log the exchange under `session_id`.
    ///
    /// The first chunk is awaited before anything is logged, so provider
    /// failures (authentication, network, rate limits) are returned here and
    /// leave no log entry. Logging failures are reported and swallowed.
    ///
    /// # Errors
    ///
    /// - [`AgentError::EmptyHistory`] if `history` is empty
    /// - [`AgentError::Llm`] if the provider fails before the first chunk
    pub async fn answer_and_log(
        &self,
        history: &[Message],
        session_id: &SessionId,
    ) -> Result<AnswerStream, AgentError> {
        let (Some(first), Some(last)) = (history.first(), history.last()) else {
            return Err(AgentError::EmptyHistory);
        };

        let task_id = TaskId::generate();
        let span = info_span!(
            "gen_ai.chat",
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = %self.provider_kind,
            gen_ai.request.model = %self.model,
            session_id = %session_id,
            task_id = %task_id,
        );

        let request = self.build_request(history);
        debug!(parent: &span, messages = request.messages.len(), "Opening completion stream");
        let mut upstream = self.llm.stream(request);

        let head = match upstream.next().instrument(span.clone()).await {
            Some(Ok(chunk)) => Some(chunk),
            Some(Err(e)) => {
                warn!(parent: &span, error = %e, "Completion request failed");
                return Err(e.into());
            }
            None => None,
        };
        let rejoined: ChunkStream =
            Box::pin(futures_util::stream::iter(head.map(Ok)).chain(upstream));
        let (answer, replay) = tee(rejoined);

        let entry = LogEntry {
            task_id: task_id.clone(),
            session_id: session_id.clone(),
            input: last.content.clone(),
            output: replay,
            metadata: LogMetadata {
                intro: first.content.clone(),
                model: self.model.clone(),
                provider: self.provider_kind.to_string(),
            },
        };
        if let Err(e) = self.telemetry.log(entry) {
            warn!(parent: &span, error = %e, "Failed to submit exchange to telemetry");
        }

        Ok(AnswerStream {
            inner: answer,
            exchange: Exchange {
                task_id,
                session_id: session_id.clone(),
            },
            span,
        })
    }

    /// `[persona] + history`.
    pub(crate) fn build_request(&self, history: &[Message]) -> ChatRequest {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(persona_instruction());
        messages.extend_from_slice(history);

        ChatRequest {
            model: self.model.clone(),
            messages,
        }
    }
}
