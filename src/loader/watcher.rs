//! Table file change polling
//!
//! The reload task polls each configured table file's mtime on a fixed
//! interval. When any file changes (or appears, or disappears and comes
//! back), the full catalog is rebuilt off to the side and published in one
//! swap. A failed rebuild leaves the previous catalog published and is
//! retried on the next observed change.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::catalog::SharedCatalog;
use crate::config::DeviceConfig;
use crate::observability::Logger;

/// Observed mtime per table path; `None` means the file is currently
/// unreadable or missing.
type MtimeMap = HashMap<PathBuf, Option<SystemTime>>;

/// Polls table files and republishes the catalog on change.
pub struct TableWatcher {
    devices: Vec<DeviceConfig>,
    poll: Duration,
    seen: MtimeMap,
}

impl TableWatcher {
    /// Create a watcher primed with the current file mtimes, so the load
    /// that just produced the initial catalog is not immediately repeated.
    pub fn new(devices: Vec<DeviceConfig>, poll: Duration) -> Self {
        let seen = Self::observe(&devices);
        Self {
            devices,
            poll,
            seen,
        }
    }

    /// Run the poll loop forever, publishing into `shared`.
    pub async fn run(mut self, shared: Arc<SharedCatalog>) {
        let mut ticker = tokio::time::interval(self.poll);
        // The first tick fires immediately; skip it so a freshly started
        // server does not reload right after the initial load.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.poll_once(&shared);
        }
    }

    /// One poll cycle: detect changes, rebuild, publish. Split out of the
    /// loop for testability.
    pub fn poll_once(&mut self, shared: &SharedCatalog) {
        let current = Self::observe(&self.devices);
        if current == self.seen {
            return;
        }

        Logger::info("TABLE_CHANGE_DETECTED", &[]);

        match super::load_catalog(&self.devices) {
            Ok(catalog) => {
                shared.publish(catalog);
                self.seen = current;
                Logger::info("CATALOG_PUBLISHED", &[]);
            }
            Err(err) => {
                // Keep the old catalog; `seen` is not advanced so the next
                // cycle retries as long as the files still differ.
                Logger::error("CATALOG_RELOAD_FAILED", &[("error", &err.to_string())]);
            }
        }
    }

    fn observe(devices: &[DeviceConfig]) -> MtimeMap {
        devices
            .iter()
            .map(|d| {
                let mtime = fs::metadata(&d.table).and_then(|m| m.modified()).ok();
                (d.table.clone(), mtime)
            })
            .collect()
    }
}
