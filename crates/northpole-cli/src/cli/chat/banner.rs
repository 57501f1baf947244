//! Welcome banner for chat sessions.

use console::style;

use crate::state::TelemetryStatus;

/// Print the banner: model, session, and where exchanges are logged.
pub fn print_welcome_banner(
    provider: &str,
    model: &str,
    session_id: &str,
    telemetry: &TelemetryStatus,
) {
    let logging = match telemetry {
        TelemetryStatus::Phospho { project_id } => format!("phospho ({project_id})"),
        TelemetryStatus::Disabled => "off".to_string(),
        TelemetryStatus::MissingCredentials => {
            "off (set PHOSPHO_API_KEY and PHOSPHO_PROJECT_ID)".to_string()
        }
    };

    println!();
    println!("  \u{1F385} {}", style("North Pole hotline").red().bold());
    println!();
    println!("  {}    {}", style("Model:").bold(), style(format!("{provider}/{model}")).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!("  {}  {}", style("Logging:").bold(), style(logging).dim());
    println!();
    println!("  {}", style("Type /help for commands, /good or /bad to rate an answer").dim());
    println!("  {}", style("---").dim());
    println!();
}
