use anyhow::Result;
use clap::{Parser, Subcommand};
use controller::Controller;
use shared::protocol::{ControllerRequest, ControllerResponse};
use signal::render_pattern;
use tracing_subscriber::EnvFilter;

/// Drives a fresh fiber tester controller from the command line and prints
/// each result as JSON.
#[derive(Parser, Debug)]
#[command(name = "fiber-tester")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Set color (Red, Green, Blue)
    SetColor { color: String },
    /// Set number (0-100)
    SetNumber {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Prepare transmission
    Prepare,
    /// Complete transmission
    Complete,
    /// Clear selection
    Clear,
    /// Get current status
    Status,
    /// Select, prepare and complete in one go
    Send {
        color: String,
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Show the pulse pattern of arbitrary text
    Encode { text: String },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(command: Command) -> Result<serde_json::Value> {
    let mut controller = Controller::new();

    let request = match command {
        Command::SetColor { color } => ControllerRequest::SetColor { color },
        Command::SetNumber { number } => ControllerRequest::SetNumber { number },
        Command::Prepare => ControllerRequest::Prepare,
        Command::Complete => ControllerRequest::Complete,
        Command::Clear => ControllerRequest::Clear,
        Command::Status => ControllerRequest::Status,
        Command::Send { color, number } => {
            let steps = [
                ControllerRequest::SetColor { color },
                ControllerRequest::SetNumber { number },
                ControllerRequest::Prepare,
                ControllerRequest::Complete,
            ];
            let mut results = Vec::with_capacity(steps.len());
            for step in steps {
                let response = controller.handle(step);
                let refused =
                    matches!(&response, ControllerResponse::Operation(result) if !result.success);
                results.push(serde_json::to_value(response)?);
                if refused {
                    break;
                }
            }
            return Ok(serde_json::Value::Array(results));
        }
        Command::Encode { text } => {
            let pattern = render_pattern(&text)?;
            return Ok(serde_json::json!({ "text": text, "pattern": pattern }));
        }
    };

    Ok(serde_json::to_value(controller.handle(request))?)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
