//! ValidationReport - data-quality findings for one inventory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::inventory::{Column, OsFamily};

/// A non-fatal data-quality finding: some records lack a required field.
///
/// Issues are surfaced to the operator but never block the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityIssue {
    pub field: Column,
    pub missing: usize,
}

impl DataQualityIssue {
    /// Returns the operator-facing description.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} records missing {}", self.missing, self.field)
    }
}

/// Result of validating an inventory against a list of required fields.
///
/// Computed fresh from an inventory and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    total_records: usize,
    counts_by_os_family: BTreeMap<OsFamily, usize>,
    missing_field_counts: BTreeMap<Column, usize>,
    issues: Vec<DataQualityIssue>,
    is_clean: bool,
}

impl ValidationReport {
    pub(crate) fn new(
        total_records: usize,
        counts_by_os_family: BTreeMap<OsFamily, usize>,
        missing_field_counts: BTreeMap<Column, usize>,
        issues: Vec<DataQualityIssue>,
    ) -> Self {
        let is_clean = issues.is_empty();
        Self {
            total_records,
            counts_by_os_family,
            missing_field_counts,
            issues,
            is_clean,
        }
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Record counts per OS family; every family is present, zeros included.
    pub fn counts_by_os_family(&self) -> &BTreeMap<OsFamily, usize> {
        &self.counts_by_os_family
    }

    /// Count for a single family.
    pub fn family_count(&self, family: OsFamily) -> usize {
        self.counts_by_os_family.get(&family).copied().unwrap_or(0)
    }

    /// Missing-value counts for each required field, zeros included.
    pub fn missing_field_counts(&self) -> &BTreeMap<Column, usize> {
        &self.missing_field_counts
    }

    /// Missing-value count for one field (0 for fields that were not required).
    pub fn missing_count(&self, field: Column) -> usize {
        self.missing_field_counts.get(&field).copied().unwrap_or(0)
    }

    /// Total absent values across all required fields.
    pub fn total_missing(&self) -> usize {
        self.missing_field_counts.values().sum()
    }

    /// Issues in required-field order.
    pub fn issues(&self) -> &[DataQualityIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.is_clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_description_names_count_and_field() {
        let issue = DataQualityIssue {
            field: Column::CpuCores,
            missing: 3,
        };
        assert_eq!(issue.description(), "3 records missing CPU_Cores");
    }

    #[test]
    fn report_is_clean_only_without_issues() {
        let clean = ValidationReport::new(0, BTreeMap::new(), BTreeMap::new(), vec![]);
        assert!(clean.is_clean());

        let dirty = ValidationReport::new(
            1,
            BTreeMap::new(),
            BTreeMap::new(),
            vec![DataQualityIssue {
                field: Column::Os,
                missing: 1,
            }],
        );
        assert!(!dirty.is_clean());
    }

    #[test]
    fn lookups_default_to_zero() {
        let report = ValidationReport::new(0, BTreeMap::new(), BTreeMap::new(), vec![]);
        assert_eq!(report.family_count(OsFamily::Linux), 0);
        assert_eq!(report.missing_count(Column::StorageType), 0);
        assert_eq!(report.total_missing(), 0);
    }
}
