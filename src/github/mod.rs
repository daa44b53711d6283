//! GitHub-facing surface of the relay: webhook verification/parsing and the
//! HTTP server that feeds the event queue.
pub mod server;
mod webhook;

pub use webhook::WebhookSecret;
