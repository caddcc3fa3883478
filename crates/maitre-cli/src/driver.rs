//! Demo driver: one session, a fixed scripted sequence of tool calls.

use std::path::Path;
use std::sync::Arc;

use maitre_mcp::McpSession;
use serde_json::{Value, json};
use tracing::warn;

use crate::config::ClientConfig;
use crate::console::{ConsolePrompt, PromptError, PromptSource as _};
use crate::handler::ConsoleElicitationHandler;
use crate::theme::Theme;

/// Path of the optional configuration file.
const CONFIG_FILE: &str = "maitre.toml";

/// Tool exercised by the scripted scenarios.
const BOOKING_TOOL: &str = "book_table";

/// How the demo ended. Both variants are normal terminations.
pub(crate) enum Outcome {
    /// The script ran to its end (or the user declined to continue).
    Completed,
    /// The user cancelled mid-script.
    Cancelled,
}

struct Scenario {
    name: &'static str,
    args: Value,
}

/// The fixed demo script, in order. Each call may trigger zero or more
/// elicitation round-trips depending on which arguments are missing or
/// rejected by the server.
fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "No arguments (full elicitation)",
            args: json!({}),
        },
        Scenario {
            name: "With date only",
            args: json!({"date": "2025-07-01"}),
        },
        Scenario {
            name: "Invalid date",
            args: json!({"date": "2024-01-01", "party_size": 4}),
        },
    ]
}

/// Run the demo: connect, list diagnostics, walk the scenario script.
pub(crate) async fn run() -> anyhow::Result<Outcome> {
    let config = ClientConfig::load(Path::new(CONFIG_FILE))?;
    let prompt = ConsolePrompt::new();
    let handler = Arc::new(ConsoleElicitationHandler::new(ConsolePrompt::new()));

    let session = McpSession::connect(&config.server_name, &config.server_url, handler).await?;

    if let Some(info) = session.server_info() {
        println!(
            "{}",
            Theme::success(&format!(
                "Connected with capabilities: {:?}",
                info.capabilities.enabled()
            ))
        );
    }

    let tools = session.list_tools().await?;
    let tool_names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    println!(
        "{}",
        Theme::success(&format!("Available tools: {tool_names:?}"))
    );

    println!("\n{}", Theme::header("Starting table booking process..."));

    let scenarios = scenarios();
    let mut outcome = Outcome::Completed;

    for (i, scenario) in scenarios.iter().enumerate() {
        println!("\n--- Testing: {} ---", scenario.name);

        // A failed tool call is reported and the script moves on.
        match session.call_tool(BOOKING_TOOL, scenario.args.clone()).await {
            Ok(result) if result.is_error => {
                println!(
                    "{}",
                    Theme::error(&format!("Error: {}", result.text_content()))
                );
            },
            Ok(result) => {
                println!(
                    "{}",
                    Theme::success(&format!("Result: {}", result.text_content()))
                );
            },
            Err(e) => {
                println!("{}", Theme::error(&format!("Error: {e}")));
            },
        }

        if i.saturating_add(1) < scenarios.len() {
            match prompt.read_line("\nTry next scenario? (y/n): ").await {
                Ok(answer) if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") => {},
                Ok(_) => break,
                Err(PromptError::Cancelled) => {
                    println!("{}", Theme::warning("Demo cancelled by user"));
                    outcome = Outcome::Cancelled;
                    break;
                },
                Err(e) => return Err(e.into()),
            }
        }
    }

    if let Err(e) = session.close().await {
        warn!(error = %e, "Failed to close session cleanly");
    }

    Ok(outcome)
}
