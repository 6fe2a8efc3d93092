//! Shared catalog cell
//!
//! The one piece of shared mutable state in the service. Readers take an
//! `Arc` snapshot and resolve against it without holding any lock; the
//! reload task builds a complete replacement catalog off to the side and
//! publishes it with a single pointer swap. A reader sees either the old
//! catalog in full or the new one in full, never a mix.

use std::sync::{Arc, RwLock};

use super::table::Catalog;

/// Swappable catalog reference, published by replacement only.
#[derive(Debug)]
pub struct SharedCatalog {
    inner: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Snapshot of the currently published catalog. Cheap (one Arc clone);
    /// the lock is released before the snapshot is used.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Publish a fully built replacement catalog.
    pub fn publish(&self, catalog: Catalog) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(catalog);
    }
}
