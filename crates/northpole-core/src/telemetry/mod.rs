//! Logging/observability backend port.
//!
//! The agent reports every relayed exchange and every piece of user feedback
//! to a [`TelemetryBackend`]. This is separate from `tracing`: tracing carries
//! diagnostics, the backend receives the conversation transcript.
//!
//! - `TelemetryBackend`: RPITIT trait implemented in northpole-infra
//! - `BoxTelemetryBackend`: object-safe wrapper for runtime selection
//! - `NoopTelemetry`: backend used when telemetry is disabled

pub mod box_backend;
pub mod noop;

use std::future::Future;

use chrono::Utc;
use northpole_types::error::TelemetryError;
use northpole_types::llm::{ChatChunk, LlmError};
use northpole_types::telemetry::{
    FeedbackRecord, LogEvent, LogMetadata, SessionId, TaskId,
};

use crate::stream::tee::Replay;

pub use box_backend::BoxTelemetryBackend;
pub use noop::NoopTelemetry;

/// Replay of the provider chunk stream handed to the backend.
pub type ChunkReplay = Replay<Result<ChatChunk, LlmError>>;

/// One exchange submitted for logging.
///
/// `output` is still in flight when the entry is submitted; the backend
/// drains it at its own pace.
pub struct LogEntry {
    pub task_id: TaskId,
    pub session_id: SessionId,
    pub input: String,
    pub output: ChunkReplay,
    pub metadata: LogMetadata,
}

impl LogEntry {
    /// Drain the output replay and build the wire event.
    ///
    /// Text deltas are concatenated in order. A provider error ends the
    /// output and is recorded on the event.
    pub async fn into_event(self, project_id: &str) -> LogEvent {
        let client_created_at = Utc::now();
        let (output, error) = drain_output(self.output).await;
        LogEvent {
            client_created_at,
            project_id: project_id.to_string(),
            session_id: self.session_id,
            task_id: self.task_id,
            input: self.input,
            output,
            metadata: self.metadata,
            error,
        }
    }
}

/// Concatenate the text of a chunk replay.
pub async fn drain_output(mut output: ChunkReplay) -> (String, Option<String>) {
    let mut text = String::new();
    while let Some(item) = output.recv().await {
        match item {
            Ok(chunk) => {
                if let Some(delta) = chunk.delta {
                    text.push_str(&delta);
                }
            }
            Err(e) => return (text, Some(e.to_string())),
        }
    }
    (text, None)
}

/// Trait for logging backends (phospho, no-op, test doubles).
pub trait TelemetryBackend: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Issue a new session correlation id.
    fn new_session(&self) -> impl Future<Output = Result<SessionId, TelemetryError>> + Send;

    /// Submit an exchange for logging.
    ///
    /// Must not wait on `entry.output`: the caller is still streaming it.
    /// Implementations drain the output in their own task.
    fn log(&self, entry: LogEntry) -> Result<(), TelemetryError>;

    /// Attach user feedback to a logged exchange.
    fn user_feedback(
        &self,
        record: &FeedbackRecord,
    ) -> impl Future<Output = Result<(), TelemetryError>> + Send;

    /// Wait until every submitted exchange has been delivered.
    fn flush(&self) -> impl Future<Output = ()> + Send {
        async {}
    }
}
