//! Slash command parsing for the chat loop.

use console::style;

use northpole_types::telemetry::FeedbackFlag;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    Clear,
    Exit,
    /// Rate Santa's last answer, with optional notes.
    Rate {
        flag: FeedbackFlag,
        notes: Option<String>,
    },
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, Some(rest.trim()).filter(|s| !s.is_empty())),
        None => (trimmed, None),
    };
    let notes = arg.map(str::to_string);

    match cmd.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/good" | "/+" => Some(ChatCommand::Rate {
            flag: FeedbackFlag::Success,
            notes,
        }),
        "/bad" | "/-" => Some(ChatCommand::Rate {
            flag: FeedbackFlag::Failure,
            notes,
        }),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}  {}", style("/good [notes]").cyan(), "Tell Santa his last answer was good");
    println!("  {}   {}", style("/bad [notes]").cyan(), "Tell Santa his last answer was bad");
    println!("  {}          {}", style("/help").cyan(), "Show this help message");
    println!("  {}         {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}          {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
