//! Serverless function entry point.
//!
//! A single, stateless adapter from a generic cloud HTTP event to a
//! canned per-domain chatbot response. The `function-shim` binary
//! wires stdin/stdout to `handle_event` for custom-runtime contracts.

pub mod event;
pub mod handler;

pub use event::{FunctionEvent, FunctionResponse};
pub use handler::{error_response, handle_event};
