//! Maitre - MCP elicitation demo client.
//!
//! Connects to a local booking server over streamable HTTP and walks a
//! fixed sequence of `book_table` calls. Whenever the server pauses a call
//! to ask for input (a date, a party size, a confirmation), the console
//! elicitation handler collects and validates it interactively.
//!
//! No flags: run the binary, answer the prompts. The process exits 0 on
//! normal or user-cancelled completion and always prints a final summary
//! line.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod classify;
mod config;
mod console;
mod driver;
mod handler;
mod theme;
mod validators;

use tracing_subscriber::EnvFilter;

use crate::theme::Theme;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Every path below is a normal termination; failures are reported in
    // the summary line rather than through the exit code.
    match driver::run().await {
        Ok(driver::Outcome::Completed) => {
            println!("\n{}", Theme::success("Demo completed!"));
        },
        Ok(driver::Outcome::Cancelled) => {
            println!("\n{}", Theme::warning("Demo cancelled"));
        },
        Err(e) => {
            println!("\n{}", Theme::error(&format!("Demo failed: {e}")));
        },
    }
}
