//! Stream plumbing shared by the agent and the telemetry port.

pub mod tee;
