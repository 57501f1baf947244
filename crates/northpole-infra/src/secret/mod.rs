//! Secret providers.

pub mod env;

pub use env::EnvSecretProvider;

/// Environment variable holding the phospho API key.
pub const PHOSPHO_API_KEY: &str = "PHOSPHO_API_KEY";

/// Environment variable holding the phospho project id.
pub const PHOSPHO_PROJECT_ID: &str = "PHOSPHO_PROJECT_ID";
