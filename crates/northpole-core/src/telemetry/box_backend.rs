//! BoxTelemetryBackend -- object-safe dynamic dispatch wrapper for TelemetryBackend.
//!
//! Same blanket-impl pattern as the provider box:
//! 1. Define an object-safe `TelemetryBackendDyn` trait with boxed futures
//! 2. Blanket-impl `TelemetryBackendDyn` for all `T: TelemetryBackend`
//! 3. `BoxTelemetryBackend` wraps `Box<dyn TelemetryBackendDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use northpole_types::error::TelemetryError;
use northpole_types::telemetry::{FeedbackRecord, SessionId};

use super::{LogEntry, TelemetryBackend};

/// Object-safe version of [`TelemetryBackend`] with boxed futures.
pub trait TelemetryBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn new_session_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<SessionId, TelemetryError>> + Send + '_>>;

    fn log(&self, entry: LogEntry) -> Result<(), TelemetryError>;

    fn user_feedback_boxed<'a>(
        &'a self,
        record: &'a FeedbackRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), TelemetryError>> + Send + 'a>>;

    fn flush_boxed(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

impl<T: TelemetryBackend> TelemetryBackendDyn for T {
    fn name(&self) -> &str {
        TelemetryBackend::name(self)
    }

    fn new_session_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<SessionId, TelemetryError>> + Send + '_>> {
        Box::pin(self.new_session())
    }

    fn log(&self, entry: LogEntry) -> Result<(), TelemetryError> {
        TelemetryBackend::log(self, entry)
    }

    fn user_feedback_boxed<'a>(
        &'a self,
        record: &'a FeedbackRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), TelemetryError>> + Send + 'a>> {
        Box::pin(self.user_feedback(record))
    }

    fn flush_boxed(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(self.flush())
    }
}

/// Type-erased telemetry backend for runtime selection (phospho vs no-op).
pub struct BoxTelemetryBackend {
    inner: Box<dyn TelemetryBackendDyn>,
}

impl BoxTelemetryBackend {
    /// Wrap a concrete `TelemetryBackend` in a type-erased box.
    pub fn new<T: TelemetryBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn new_session(&self) -> Result<SessionId, TelemetryError> {
        self.inner.new_session_boxed().await
    }

    pub fn log(&self, entry: LogEntry) -> Result<(), TelemetryError> {
        self.inner.log(entry)
    }

    pub async fn user_feedback(&self, record: &FeedbackRecord) -> Result<(), TelemetryError> {
        self.inner.user_feedback_boxed(record).await
    }

    pub async fn flush(&self) {
        self.inner.flush_boxed().await
    }
}
