//! Device tables and the catalog
//!
//! A `DeviceTable` is the ordered, immutable set of code records for one
//! device id, built by the loader and never mutated afterward. Lookups are
//! linear scans returning row indices in source order; tables hold at most a
//! few hundred rows, so no index structure is warranted.

use std::collections::BTreeMap;

use super::record::CodeRecord;

/// All code records for one device, in source order.
#[derive(Debug, Clone)]
pub struct DeviceTable {
    device: String,
    remap: bool,
    records: Vec<CodeRecord>,
}

impl DeviceTable {
    pub fn new(device: impl Into<String>, remap: bool, records: Vec<CodeRecord>) -> Self {
        Self {
            device: device.into(),
            remap,
            records,
        }
    }

    /// Device id this table belongs to
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Whether numeric queries on this device go through the remap
    /// candidate path
    pub fn remap_enabled(&self) -> bool {
        self.remap
    }

    /// Records in source order
    pub fn records(&self) -> &[CodeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row indices whose `code_str` equals `needle` exactly, in source order.
    /// `needle` must already be uppercased by the caller.
    pub fn rows_matching_str<'a>(
        &'a self,
        needle: &'a str,
    ) -> impl Iterator<Item = usize> + 'a {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.code_str == needle)
            .map(|(i, _)| i)
    }

    /// Row indices whose `code_num` equals `value`, in source order.
    pub fn rows_matching_num(&self, value: i64) -> impl Iterator<Item = usize> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.code_num == Some(value))
            .map(|(i, _)| i)
    }

    /// Numeric codes present in this table, in source order. Input to the
    /// exhaustive inverse-candidate scan.
    pub fn numeric_codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.records.iter().filter_map(|r| r.code_num)
    }
}

/// One load cycle's worth of device tables, keyed by device id.
///
/// Immutable after construction; replaced wholesale on reload via
/// `SharedCatalog`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<String, DeviceTable>,
}

impl Catalog {
    pub fn new(tables: Vec<DeviceTable>) -> Self {
        let tables = tables
            .into_iter()
            .map(|t| (t.device().to_string(), t))
            .collect();
        Self { tables }
    }

    /// Table for a configured device id, `None` for unknown devices
    pub fn table(&self, device: &str) -> Option<&DeviceTable> {
        self.tables.get(device)
    }

    /// Configured device ids, sorted
    pub fn device_ids(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
