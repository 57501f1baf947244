//! Telemetry backend implementations.
//!
//! - `phospho`: HTTP client for the phospho logging API

pub mod phospho;

pub use phospho::{PhosphoClient, PhosphoConfig};
