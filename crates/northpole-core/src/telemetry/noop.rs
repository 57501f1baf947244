//! Backend used when telemetry is disabled or unconfigured.

use northpole_types::error::TelemetryError;
use northpole_types::telemetry::{FeedbackRecord, SessionId};
use tracing::debug;

use super::{LogEntry, TelemetryBackend};

/// Mints session ids locally and discards everything else.
#[derive(Debug, Default)]
pub struct NoopTelemetry;

impl TelemetryBackend for NoopTelemetry {
    fn name(&self) -> &str {
        "noop"
    }

    async fn new_session(&self) -> Result<SessionId, TelemetryError> {
        Ok(SessionId::generate())
    }

    fn log(&self, entry: LogEntry) -> Result<(), TelemetryError> {
        debug!(task_id = %entry.task_id, "telemetry disabled, exchange not logged");
        Ok(())
    }

    async fn user_feedback(&self, record: &FeedbackRecord) -> Result<(), TelemetryError> {
        debug!(task_id = %record.task_id, flag = %record.flag, "telemetry disabled, feedback dropped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::BoxTelemetryBackend;

    #[tokio::test]
    async fn test_noop_sessions_are_distinct() {
        let backend = BoxTelemetryBackend::new(NoopTelemetry);
        let a = backend.new_session().await.unwrap();
        let b = backend.new_session().await.unwrap();
        assert_ne!(a, b);
        assert_eq!(backend.name(), "noop");
    }
}
