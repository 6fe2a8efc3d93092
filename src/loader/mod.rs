//! Table loading for errdesk
//!
//! Builds immutable `DeviceTable`s from the configured CSV files and
//! assembles them into a `Catalog`. Columns are located by header name
//! (`code`, `err_name`, `desc`, `attach`); order is irrelevant and unknown
//! columns are ignored. Rows with an empty `code` cell can never match a
//! query and are skipped with a warning.
//!
//! The loader never mutates a published catalog: callers build a full
//! replacement and hand it to `SharedCatalog::publish`.

mod csv;
mod errors;
mod watcher;

pub use errors::{LoadError, LoadResult};
pub use watcher::TableWatcher;

use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, CodeRecord, DeviceTable};
use crate::config::DeviceConfig;
use crate::observability::Logger;

/// Column names recognized in table headers (matched case-insensitively).
const COL_CODE: &str = "code";
const COL_ERR_NAME: &str = "err_name";
const COL_DESC: &str = "desc";
const COL_ATTACH: &str = "attach";

/// Build the full catalog for the configured devices.
///
/// Any unreadable or malformed table file fails the whole load; partial
/// catalogs are never produced.
pub fn load_catalog(devices: &[DeviceConfig]) -> LoadResult<Catalog> {
    let mut tables = Vec::with_capacity(devices.len());
    for device in devices {
        tables.push(load_table(device)?);
    }
    Ok(Catalog::new(tables))
}

/// Load one device's table file.
pub fn load_table(device: &DeviceConfig) -> LoadResult<DeviceTable> {
    let content = fs::read_to_string(&device.table).map_err(|source| LoadError::Read {
        path: device.table.clone(),
        source,
    })?;

    let records = parse_table(&content, &device.table)?;
    Logger::info(
        "TABLE_LOADED",
        &[
            ("device", &device.id),
            ("rows", &records.len().to_string()),
        ],
    );

    Ok(DeviceTable::new(device.id.clone(), device.remap, records))
}

/// Parse CSV content into records. `path` is used for error context only.
fn parse_table(content: &str, path: &Path) -> LoadResult<Vec<CodeRecord>> {
    let rows = csv::parse_rows(content).map_err(|reason| LoadError::Csv {
        path: path.to_path_buf(),
        reason,
    })?;

    let mut rows = rows.into_iter();
    let header = rows.next().ok_or_else(|| LoadError::EmptyTable {
        path: path.to_path_buf(),
    })?;

    let find = |name: &str| {
        header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    let code_col = find(COL_CODE).ok_or(LoadError::MissingColumn {
        path: path.to_path_buf(),
        column: COL_CODE,
    })?;
    let err_name_col = find(COL_ERR_NAME);
    let desc_col = find(COL_DESC);
    let attach_col = find(COL_ATTACH);

    let cell = |row: &[String], col: Option<usize>| -> String {
        col.and_then(|i| row.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let mut records = Vec::new();
    for (line, row) in rows.enumerate() {
        let code = cell(&row, Some(code_col));
        if code.is_empty() {
            Logger::warn(
                "ROW_SKIPPED",
                &[
                    ("path", &path.display().to_string()),
                    ("row", &(line + 2).to_string()),
                    ("reason", "empty code cell"),
                ],
            );
            continue;
        }

        records.push(CodeRecord::new(
            code,
            cell(&row, err_name_col),
            cell(&row, desc_col),
            cell(&row, attach_col),
        ));
    }

    Ok(records)
}
