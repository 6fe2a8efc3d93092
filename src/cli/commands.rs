//! CLI command implementations
//!
//! `serve` is the long-running entry point: load config, build the initial
//! catalog (fatal on failure — there is nothing to fall back to), then run
//! the HTTP server with the reload poll task beside it. `query` and
//! `candidates` are one-shot commands against a fresh load, for scripting
//! and support diagnostics.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::SharedCatalog;
use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::loader::{self, TableWatcher};
use crate::mapping;
use crate::observability::Logger;
use crate::resolver::{resolve, ResolveError};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch one parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config),
        Command::Query {
            config,
            device,
            code,
        } => query(&config, device.as_deref(), &code),
        Command::Candidates {
            config,
            device,
            code,
        } => candidates(&config, device.as_deref(), code),
    }
}

/// Boot sequence: config, initial load, watcher + server
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;

    let catalog = loader::load_catalog(&config.devices)?;
    Logger::info(
        "CATALOG_LOADED",
        &[("devices", &catalog.len().to_string())],
    );

    let shared = Arc::new(SharedCatalog::new(catalog));
    let watcher = TableWatcher::new(
        config.devices.clone(),
        Duration::from_secs(config.reload_poll_secs),
    );
    let server = HttpServer::new(
        config.server.clone(),
        shared.clone(),
        config.default_device.clone(),
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        tokio::spawn(watcher.run(shared));
        server.start().await
    })?;

    Ok(())
}

/// One-shot resolve; prints the record as JSON, exits non-zero on a miss
pub fn query(config_path: &Path, device: Option<&str>, code: &str) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let catalog = loader::load_catalog(&config.devices)?;
    let device = device.unwrap_or(&config.default_device);

    let record = resolve(&catalog, device, code)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&record).expect("record serializes")
    );

    Ok(())
}

/// One-shot candidate dump for the remap diagnostics surface
pub fn candidates(config_path: &Path, device: Option<&str>, code: i64) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let catalog = loader::load_catalog(&config.devices)?;
    let device = device.unwrap_or(&config.default_device);

    let table = catalog
        .table(device)
        .ok_or_else(|| ResolveError::UnknownDevice {
            device: device.to_string(),
            input: code.to_string(),
        })?;

    let cands: Vec<i64> = mapping::candidates(code, table).into_iter().collect();
    println!(
        "{}",
        serde_json::to_string(&serde_json::json!({
            "device": device,
            "input": code,
            "forward": mapping::forward(code),
            "candidates": cands,
        }))
        .expect("value serializes")
    );

    Ok(())
}
