//! Feedback relay: user ratings attached to logged exchanges.

use tracing::{debug, info};

use northpole_types::error::AgentError;
use northpole_types::telemetry::{Exchange, FeedbackFlag, FeedbackRecord};

use super::PersonaAgent;

impl PersonaAgent {
    /// Rate a previously logged exchange.
    ///
    /// Does nothing when no flag was given or when there is no exchange to
    /// attach it to. Repeated calls for the same exchange each submit a
    /// record.
    pub async fn feedback(
        &self,
        exchange: Option<&Exchange>,
        flag: Option<FeedbackFlag>,
        notes: Option<String>,
    ) -> Result<(), AgentError> {
        let Some(flag) = flag else {
            return Ok(());
        };
        let Some(exchange) = exchange else {
            debug!(%flag, "No exchange to rate, feedback ignored");
            return Ok(());
        };

        let record = FeedbackRecord {
            task_id: exchange.task_id.clone(),
            flag,
            notes,
        };
        self.telemetry.user_feedback(&record).await?;
        info!(
            session_id = %exchange.session_id,
            task_id = %record.task_id,
            %flag,
            "Feedback submitted"
        );
        Ok(())
    }
}
