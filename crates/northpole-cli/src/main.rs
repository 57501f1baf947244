//! northpole CLI entry point.
//!
//! Binary name: `northpole`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then
//! dispatches to the chat loop or the one-shot intro.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    northpole_observe::tracing_setup::init_tracing(cli.log_filter(), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "northpole", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    let result = match cli.command {
        Commands::Chat { provider } => {
            cli::chat::loop_runner::run_chat_loop(&state, provider.as_deref()).await
        }
        Commands::Intro { delay_ms } => cli::intro::run_intro(&state, delay_ms).await,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    northpole_observe::tracing_setup::shutdown_tracing();
    result
}
