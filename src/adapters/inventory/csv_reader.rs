//! CSV inventory reader.
//!
//! Reads the inventory export format: a header row naming schema columns,
//! then one row per server. Unknown columns are ignored and header names
//! match case-insensitively.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::foundation::Percentage;
use crate::domain::inventory::{Column, Inventory, InventoryError, ServerRecord, StorageType};
use crate::ports::InventorySource;

/// Largest accepted numeric cell. Anything bigger is not a real server.
const MAX_QUANTITY: f64 = 1e9;

enum CsvInput {
    File(PathBuf),
    Text(String),
}

/// `InventorySource` over a CSV file or in-memory text.
pub struct CsvInventoryReader {
    input: CsvInput,
}

impl CsvInventoryReader {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            input: CsvInput::File(path.as_ref().to_path_buf()),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            input: CsvInput::Text(text.into()),
        }
    }

    /// Parses an inventory from any reader.
    ///
    /// Empty or unparsable numeric cells become `None`, as do negative
    /// numbers, quantities above `MAX_QUANTITY` and utilization outside 0-100.
    ///
    /// # Errors
    ///
    /// - `MissingHeader` if the input has no header row
    /// - `Unreadable` on I/O failure or rows with the wrong number of cells
    /// - `DuplicateServerName` if two rows share a name
    pub fn parse_reader<R: Read>(reader: R) -> Result<Inventory, InventoryError> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv
            .headers()
            .map_err(|e| InventoryError::Unreadable(e.to_string()))?
            .clone();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(InventoryError::MissingHeader);
        }

        // First occurrence wins when a header repeats.
        let mut columns = BTreeSet::new();
        let mut mapping: Vec<(usize, Column)> = Vec::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(column) = Column::from_header(header) {
                if columns.insert(column) {
                    mapping.push((index, column));
                }
            }
        }

        let mut records = Vec::new();
        for row in csv.records() {
            let row = row.map_err(|e| InventoryError::Unreadable(e.to_string()))?;
            let mut record = ServerRecord::new("", "");
            for (index, column) in &mapping {
                apply_cell(&mut record, *column, row.get(*index).unwrap_or(""));
            }
            records.push(record);
        }

        debug!(
            records = records.len(),
            columns = columns.len(),
            "Parsed CSV inventory"
        );
        Inventory::new(columns, records)
    }
}

impl InventorySource for CsvInventoryReader {
    fn load(&self) -> Result<Inventory, InventoryError> {
        match &self.input {
            CsvInput::File(path) => {
                let file = File::open(path).map_err(|e| {
                    InventoryError::Unreadable(format!("{}: {}", path.display(), e))
                })?;
                Self::parse_reader(file)
            }
            CsvInput::Text(text) => Self::parse_reader(text.as_bytes()),
        }
    }

    fn describe(&self) -> String {
        match &self.input {
            CsvInput::File(path) => format!("csv file {}", path.display()),
            CsvInput::Text(text) => format!("csv text ({} bytes)", text.len()),
        }
    }
}

fn apply_cell(record: &mut ServerRecord, column: Column, cell: &str) {
    match column {
        Column::ServerName => record.name = cell.to_string(),
        Column::Os => record.os = cell.to_string(),
        Column::CpuCores => record.cpu_cores = parse_count(cell),
        Column::ApplicationCount => record.application_count = parse_count(cell),
        Column::MemoryGb => record.memory_gb = parse_number(cell),
        Column::StorageGb => record.storage_gb = parse_number(cell),
        Column::StorageType => record.storage_type = StorageType::parse(cell),
        Column::UtilizationCpu => {
            record.utilization_cpu = parse_number(cell.trim_end_matches('%'))
                .and_then(Percentage::from_measurement)
        }
    }
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && (0.0..=MAX_QUANTITY).contains(v))
}

fn parse_count(cell: &str) -> Option<u32> {
    parse_number(cell).map(|v| v.round() as u32)
}
