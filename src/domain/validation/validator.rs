//! Inventory Validator - structural and data-quality checks.

use std::collections::BTreeMap;
use thiserror::Error;

use super::{DataQualityIssue, ValidationReport};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::inventory::{Column, Inventory, OsFamily};

/// A required column is absent from the inventory header.
///
/// Distinct from a record having an empty cell: this blocks validation
/// outright and the workflow cannot advance past the Validation stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Inventory is missing required columns: {}", format_columns(.missing_columns))]
pub struct SchemaError {
    pub missing_columns: Vec<Column>,
}

fn format_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.header())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<SchemaError> for DomainError {
    fn from(err: SchemaError) -> Self {
        DomainError::new(ErrorCode::SchemaError, err.to_string())
            .with_detail("missing_columns", format_columns(&err.missing_columns))
    }
}

/// Validator for server inventories.
///
/// Pure and independent of row order: permuting the records of an
/// inventory yields an identical report.
pub struct InventoryValidator;

impl InventoryValidator {
    /// Validates an inventory against the given required fields.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if any required field has no column in the
    /// inventory header.
    pub fn validate(
        inventory: &Inventory,
        required_fields: &[Column],
    ) -> Result<ValidationReport, SchemaError> {
        let missing_columns = inventory.missing_columns(required_fields);
        if !missing_columns.is_empty() {
            return Err(SchemaError { missing_columns });
        }

        let mut fields: Vec<Column> = Vec::with_capacity(required_fields.len());
        for field in required_fields {
            if !fields.contains(field) {
                fields.push(*field);
            }
        }

        let missing_field_counts: BTreeMap<Column, usize> = fields
            .iter()
            .map(|field| {
                let missing = inventory.iter().filter(|r| !r.has_value(*field)).count();
                (*field, missing)
            })
            .collect();

        let issues = fields
            .iter()
            .filter_map(|field| {
                let missing = missing_field_counts[field];
                (missing > 0).then_some(DataQualityIssue {
                    field: *field,
                    missing,
                })
            })
            .collect();

        Ok(ValidationReport::new(
            inventory.len(),
            Self::count_families(inventory),
            missing_field_counts,
            issues,
        ))
    }

    /// Counts records per OS family, including families with no records.
    pub fn count_families(inventory: &Inventory) -> BTreeMap<OsFamily, usize> {
        let mut counts: BTreeMap<OsFamily, usize> =
            OsFamily::all().iter().map(|f| (*f, 0)).collect();
        for record in inventory.iter() {
            *counts.entry(record.os_family()).or_insert(0) += 1;
        }
        counts
    }
}
