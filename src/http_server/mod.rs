//! HTTP server module for errdesk
//!
//! Both entry points live here: the direct query API and the chat-bot skill
//! webhook. Handlers are transport only — they take a catalog snapshot,
//! call the resolver, and phrase the reply; no resolution rules live in this
//! module.
//!
//! # Endpoints
//!
//! - `GET /health` — health check
//! - `GET /favicon.ico` — browser probe, always 200
//! - `GET /resolve?device=w&code=1001` — query API with candidate diagnostics
//! - `POST /webhook/skill` — chat-bot skill endpoint

pub mod config;
pub mod health_routes;
pub mod resolve_routes;
pub mod server;
pub mod webhook_routes;

pub use config::HttpServerConfig;
pub use server::{AppState, HttpServer};
