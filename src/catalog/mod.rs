//! Catalog subsystem for errdesk
//!
//! Per-device code tables are derived, in-memory-only state built by the
//! loader from the configured table files.
//!
//! # Design Principles
//!
//! - Tables are immutable once built; reload replaces the whole catalog
//! - Lookups are linear scans; tables are small and source order matters
//! - The only shared mutable state is the `SharedCatalog` pointer cell
//!
//! # Invariants
//!
//! - `code_str` / `code_num` are derived once at record construction
//! - Row lookups always yield indices in source order
//! - Readers never observe a partially updated catalog

mod record;
mod shared;
mod table;

pub use record::CodeRecord;
pub use shared::SharedCatalog;
pub use table::{Catalog, DeviceTable};
