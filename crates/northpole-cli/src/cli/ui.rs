//! Terminal output helpers shared by the commands.

use std::io::Write;
use std::time::Duration;

use console::style;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};

use northpole_core::agent::intro::IntroStream;

/// Speaker label printed before Santa's lines.
pub const SANTA: &str = "Santa";

/// Steadily ticking spinner with `message`.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print the speaker label that opens a streamed reply.
pub fn print_speaker() {
    print!("  {} ", style(SANTA).red().bold());
    let _ = std::io::stdout().flush();
}

/// Render a typed greeting in place, one growing prefix at a time.
///
/// Returns the full greeting once the stream ends.
pub async fn type_out(mut intro: IntroStream) -> String {
    let mut shown = String::new();
    while let Some(prefix) = intro.next().await {
        print!("\r  {} {}", style(SANTA).red().bold(), prefix);
        let _ = std::io::stdout().flush();
        shown = prefix;
    }
    println!();
    shown
}
