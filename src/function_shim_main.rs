//! Custom-runtime shim for the serverless function entry point.
//!
//! Reads one HTTP event as JSON from stdin, runs the handler, and
//! writes the `{statusCode, headers, body}` response to stdout.

use std::io::Read;

use anyhow::Context;

use ragchat_backend::core::config::debug_enabled;
use ragchat_backend::function::{error_response, handle_event, FunctionEvent};

fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read event from stdin")?;

    let response = match serde_json::from_str::<FunctionEvent>(&input) {
        Ok(event) => handle_event(&event),
        Err(err) => error_response(
            &anyhow::Error::new(err).context("Failed to parse function event"),
            debug_enabled(),
        ),
    };

    let encoded = serde_json::to_string(&response).context("Failed to encode response")?;
    println!("{}", encoded);

    Ok(())
}
