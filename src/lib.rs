//! errdesk - device error-code lookup service
//!
//! Answers "what does error code X mean for device Y" from per-device code
//! tables, with a fixed interval remapping for one device class, through a
//! query API and a chat-bot skill webhook.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod loader;
pub mod mapping;
pub mod observability;
pub mod resolver;
