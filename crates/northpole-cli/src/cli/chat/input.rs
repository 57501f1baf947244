//! Async readline input for the chat loop.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// A non-empty, trimmed line.
    Line(String),
    /// Ctrl+D, or the terminal went away.
    Eof,
    /// Ctrl+C.
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok((Self { rl }, writer))
    }

    /// Wait for the next non-empty line or control event.
    pub async fn next_event(&mut self) -> InputEvent {
        loop {
            match self.rl.readline().await {
                Ok(ReadlineEvent::Line(line)) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        self.rl.add_history_entry(line.to_string());
                        return InputEvent::Line(line.to_string());
                    }
                }
                Ok(ReadlineEvent::Eof) | Err(_) => return InputEvent::Eof,
                Ok(ReadlineEvent::Interrupted) => return InputEvent::Interrupted,
            }
        }
    }

    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
