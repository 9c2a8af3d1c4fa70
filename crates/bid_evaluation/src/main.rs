use std::io::Read;

use anyhow::{Context, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use bid_evaluation::evaluate;

/// Thin stand-in for the transport layer: reads a JSON evaluation
/// request (tender + bids) from a file argument or stdin, prints the
/// ranking response or a structured error object.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read request file '{}'", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read request from stdin")?;
            buffer
        }
    };

    let request: serde_json::Value =
        serde_json::from_str(&input).context("request body is not valid JSON")?;

    match evaluate(&request) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            error!("❌ Evaluation failed: {}", e);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "error": e.kind(),
                    "message": e.to_string(),
                }))?
            );
            std::process::exit(1);
        }
    }
}
