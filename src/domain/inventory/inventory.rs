//! Inventory - the uploaded server table.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::{Column, InventoryError, ServerRecord};

/// An immutable, ordered server inventory.
///
/// # Invariants
///
/// - Non-blank server names are unique
/// - `columns` records which schema columns were present in the header,
///   independent of whether individual cells were filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    columns: BTreeSet<Column>,
    records: Vec<ServerRecord>,
}

impl Inventory {
    /// Creates an inventory from the header columns and parsed rows.
    ///
    /// # Errors
    ///
    /// - `DuplicateServerName` if two records share a non-blank name
    pub fn new(
        columns: impl IntoIterator<Item = Column>,
        records: Vec<ServerRecord>,
    ) -> Result<Self, InventoryError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let name = record.name.trim();
            if name.is_empty() {
                continue;
            }
            if !seen.insert(name) {
                return Err(InventoryError::DuplicateServerName(name.to_string()));
            }
        }

        Ok(Self {
            columns: columns.into_iter().collect(),
            records,
        })
    }

    /// Creates an inventory whose header carries every schema column.
    pub fn with_full_schema(records: Vec<ServerRecord>) -> Result<Self, InventoryError> {
        Self::new(Column::all().iter().copied(), records)
    }

    /// Returns the columns present in the header.
    pub fn columns(&self) -> &BTreeSet<Column> {
        &self.columns
    }

    /// Returns true if the header carried the column.
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Returns the requested columns that the header lacks, in request order.
    pub fn missing_columns(&self, required: &[Column]) -> Vec<Column> {
        let mut missing = Vec::new();
        for column in required {
            if !self.has_column(*column) && !missing.contains(column) {
                missing.push(*column);
            }
        }
        missing
    }

    /// Returns the records in upload order.
    pub fn records(&self) -> &[ServerRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ServerRecord {
        ServerRecord::new(name, "Linux")
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let result = Inventory::with_full_schema(vec![record("a"), record("b"), record("a")]);
        assert_eq!(result, Err(InventoryError::DuplicateServerName("a".to_string())));
    }

    #[test]
    fn duplicate_check_ignores_surrounding_whitespace() {
        let result = Inventory::with_full_schema(vec![record("a"), record(" a ")]);
        assert!(matches!(result, Err(InventoryError::DuplicateServerName(_))));
    }

    #[test]
    fn blank_names_are_not_duplicates() {
        let inventory = Inventory::with_full_schema(vec![record(""), record("  ")]).unwrap();
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn missing_columns_reports_in_request_order() {
        let inventory =
            Inventory::new([Column::ServerName, Column::Os], vec![record("a")]).unwrap();

        let missing = inventory.missing_columns(&[Column::StorageGb, Column::Os, Column::CpuCores]);
        assert_eq!(missing, vec![Column::StorageGb, Column::CpuCores]);
    }

    #[test]
    fn full_schema_has_every_column() {
        let inventory = Inventory::with_full_schema(vec![]).unwrap();
        assert!(Column::all().iter().all(|c| inventory.has_column(*c)));
        assert!(inventory.is_empty());
    }

    #[test]
    fn records_keep_upload_order() {
        let inventory =
            Inventory::with_full_schema(vec![record("z"), record("a"), record("m")]).unwrap();
        let names: Vec<_> = inventory.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
