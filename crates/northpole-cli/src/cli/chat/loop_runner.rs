//! Main chat loop orchestration.
//!
//! The caller side of the agent lives here: the loop owns the conversation
//! history, the session id, and the handle of the last answered exchange.

use std::io::Write;

use console::style;
use futures_util::StreamExt;
use tracing::{debug, info};

use northpole_core::agent::PersonaAgent;
use northpole_types::llm::Message;
use northpole_types::telemetry::{Exchange, FeedbackFlag, SessionId};

use crate::cli::ui::{print_speaker, spinner, type_out};
use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState, provider: Option<&str>) -> anyhow::Result<()> {
    let (agent, telemetry_status) = state.build_agent(provider)?;
    let session_id = agent.new_session().await?;
    info!(session_id = %session_id, "Chat session started");

    print_welcome_banner(
        &agent.provider_kind().to_string(),
        agent.model(),
        session_id.as_str(),
        &telemetry_status,
    );

    // The greeting opens the history, so every logged exchange records it.
    let greeting = type_out(agent.random_intro(&session_id)).await;
    println!();
    let mut history = vec![Message::assistant(greeting)];
    let mut last_exchange: Option<Exchange> = None;

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.next_event().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Line(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::Rate { flag, notes } => {
                    rate(&agent, last_exchange.as_ref(), flag, notes).await;
                }
                ChatCommand::Unknown(name) => println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                ),
            }
            continue;
        }

        history.push(Message::user(text));
        match relay_turn(&agent, &history, &session_id).await {
            Some((reply, exchange)) => {
                history.push(Message::assistant(reply));
                last_exchange = Some(exchange);
            }
            // Failed turns leave no trace in the history.
            None => {
                history.pop();
            }
        }
    }

    println!("\n  {}", style("Merry Christmas! Session ended.").dim());

    let flushing = spinner("sending logs to the North Pole...");
    agent.telemetry().flush().await;
    flushing.finish_and_clear();
    debug!(session_id = %session_id, turns = history.len() / 2, "Chat session finished");
    Ok(())
}

/// Stream one reply. Returns the full text and its exchange on success.
async fn relay_turn(
    agent: &PersonaAgent,
    history: &[Message],
    session_id: &SessionId,
) -> Option<(String, Exchange)> {
    let thinking = spinner("Santa is thinking...");

    let mut answer = match agent.answer_and_log(history, session_id).await {
        Ok(answer) => answer,
        Err(e) => {
            thinking.finish_and_clear();
            eprintln!("\n  {} Santa could not answer: {e}", style("!").red().bold());
            eprintln!("  {}", style("Type a message to retry, /exit to quit.").dim());
            return None;
        }
    };
    thinking.finish_and_clear();
    let exchange = answer.exchange().clone();

    println!();
    print_speaker();
    let mut reply = String::new();
    while let Some(fragment) = answer.next().await {
        match fragment {
            Ok(Some(delta)) => {
                print!("{delta}");
                let _ = std::io::stdout().flush();
                reply.push_str(&delta);
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("\n  {} Santa lost the connection: {e}", style("!").red().bold());
                return None;
            }
        }
    }
    println!();
    println!();

    Some((reply, exchange))
}

async fn rate(
    agent: &PersonaAgent,
    exchange: Option<&Exchange>,
    flag: FeedbackFlag,
    notes: Option<String>,
) {
    if exchange.is_none() {
        println!("\n  {}\n", style("Santa hasn't answered anything yet.").dim());
    }
    match agent.feedback(exchange, Some(flag), notes).await {
        Ok(()) if exchange.is_some() => {
            let thanks = match flag {
                FeedbackFlag::Success => "Thanks! Santa is glowing.",
                FeedbackFlag::Failure => "Thanks, the elves will look into it.",
            };
            println!("\n  {} {}\n", style("*").cyan().bold(), style(thanks).dim());
        }
        Ok(()) => {}
        Err(e) => eprintln!("\n  {} Feedback not sent: {e}\n", style("!").red().bold()),
    }
}
