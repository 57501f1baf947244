//! CLI command definitions for the `northpole` binary.

pub mod chat;
pub mod intro;
pub mod ui;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with Santa Claus from your terminal.
#[derive(Parser)]
#[command(name = "northpole", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "NORTHPOLE_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// LLM vendor to use ("openai" or "mistral"). Defaults to config.toml.
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Print one typed greeting and exit.
    Intro {
        /// Pause between words, in milliseconds. Defaults to config.toml.
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Tracing filter directive for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,northpole=debug",
            _ => "trace",
        }
    }
}
