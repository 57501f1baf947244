//! Test doubles for the agent tests.

use std::sync::{Arc, Mutex};

use northpole_types::error::TelemetryError;
use northpole_types::llm::{ChatChunk, ChatRequest, LlmError};
use northpole_types::telemetry::{FeedbackRecord, SessionId};

use crate::llm::provider::{ChunkStream, LlmProvider};
use crate::telemetry::{LogEntry, TelemetryBackend};

/// Provider replaying a fixed chunk script and recording requests.
pub struct ScriptedProvider {
    script: Vec<Result<ChatChunk, LlmError>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<ChatChunk, LlmError>>) -> Self {
        Self {
            script,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the requests this provider received.
    pub fn requests(&self) -> Arc<Mutex<Vec<ChatRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn stream(&self, request: ChatRequest) -> ChunkStream {
        self.requests.lock().unwrap().push(request);
        Box::pin(futures_util::stream::iter(self.script.clone()))
    }
}

#[derive(Default)]
struct Recorded {
    sessions: u32,
    entries: Vec<LogEntry>,
    feedback: Vec<FeedbackRecord>,
}

/// Backend recording every call. Clones share state.
#[derive(Clone, Default)]
pub struct RecordingTelemetry {
    recorded: Arc<Mutex<Recorded>>,
    fail_log: bool,
    fail_feedback: bool,
}

impl RecordingTelemetry {
    pub fn failing_log() -> Self {
        Self {
            fail_log: true,
            ..Default::default()
        }
    }

    pub fn failing_feedback() -> Self {
        Self {
            fail_feedback: true,
            ..Default::default()
        }
    }

    pub fn sessions_issued(&self) -> u32 {
        self.recorded.lock().unwrap().sessions
    }

    pub fn log_count(&self) -> usize {
        self.recorded.lock().unwrap().entries.len()
    }

    pub fn take_entries(&self) -> Vec<LogEntry> {
        std::mem::take(&mut self.recorded.lock().unwrap().entries)
    }

    pub fn feedback(&self) -> Vec<FeedbackRecord> {
        self.recorded.lock().unwrap().feedback.clone()
    }
}

impl TelemetryBackend for RecordingTelemetry {
    fn name(&self) -> &str {
        "recording"
    }

    async fn new_session(&self) -> Result<SessionId, TelemetryError> {
        self.recorded.lock().unwrap().sessions += 1;
        Ok(SessionId::generate())
    }

    fn log(&self, entry: LogEntry) -> Result<(), TelemetryError> {
        // Recorded even when failing, so tests can count attempts.
        self.recorded.lock().unwrap().entries.push(entry);
        if self.fail_log {
            return Err(TelemetryError::Unavailable("log endpoint down".to_string()));
        }
        Ok(())
    }

    async fn user_feedback(&self, record: &FeedbackRecord) -> Result<(), TelemetryError> {
        self.recorded.lock().unwrap().feedback.push(record.clone());
        if self.fail_feedback {
            return Err(TelemetryError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(())
    }
}
