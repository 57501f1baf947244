//! Session, exchange, and feedback types shared with the telemetry backend.
//!
//! A conversation is grouped under one [`SessionId`]. Each relayed answer is
//! one logged task identified by a [`TaskId`]; the pair travels back to the
//! caller as an [`Exchange`] so feedback can be attached to it explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque correlation id grouping every logged event of one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Mint a fresh time-sortable id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque id of one logged exchange (user input + streamed reply).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to a logged exchange, returned by the chat relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub task_id: TaskId,
    pub session_id: SessionId,
}

/// User satisfaction flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackFlag {
    Success,
    Failure,
}

impl fmt::Display for FeedbackFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackFlag::Success => write!(f, "success"),
            FeedbackFlag::Failure => write!(f, "failure"),
        }
    }
}

impl FromStr for FeedbackFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" | "good" => Ok(FeedbackFlag::Success),
            "failure" | "bad" => Ok(FeedbackFlag::Failure),
            other => Err(format!("invalid feedback flag: '{other}'")),
        }
    }
}

/// Feedback submitted for one exchange. Sent once, never stored locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub task_id: TaskId,
    pub flag: FeedbackFlag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Metadata attached to every logged exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMetadata {
    /// Content of the first history message (the greeting shown to the user).
    pub intro: String,
    pub model: String,
    pub provider: String,
}

/// A fully materialized log event, as shipped to the backend once the
/// streamed output has been drained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub client_created_at: DateTime<Utc>,
    pub project_id: String,
    pub session_id: SessionId,
    pub task_id: TaskId,
    pub input: String,
    pub output: String,
    pub metadata: LogMetadata,
    /// Set when the provider stream failed before it completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
