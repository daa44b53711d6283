//! This is the library of the devbot chat relay.
pub mod chat;
pub mod config;
pub mod github;
pub mod relay;
pub mod utils;
