//! Observability setup for northpole: tracing subscriber and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
