//! Column - the inventory schema vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column of the server inventory table.
///
/// Variants are declared in schema order; ordered maps keyed by `Column`
/// therefore iterate in the same order as the CSV template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Server_Name")]
    ServerName,
    #[serde(rename = "CPU_Cores")]
    CpuCores,
    #[serde(rename = "Memory_GB")]
    MemoryGb,
    #[serde(rename = "Storage_GB")]
    StorageGb,
    #[serde(rename = "OS")]
    Os,
    #[serde(rename = "Application_Count")]
    ApplicationCount,
    #[serde(rename = "Storage_Type")]
    StorageType,
    #[serde(rename = "Utilization_CPU")]
    UtilizationCpu,
}

impl Column {
    /// Returns all columns in schema order.
    pub fn all() -> &'static [Column] {
        &[
            Column::ServerName,
            Column::CpuCores,
            Column::MemoryGb,
            Column::StorageGb,
            Column::Os,
            Column::ApplicationCount,
            Column::StorageType,
            Column::UtilizationCpu,
        ]
    }

    /// Columns every inventory upload must carry.
    pub fn core() -> &'static [Column] {
        &[
            Column::ServerName,
            Column::CpuCores,
            Column::MemoryGb,
            Column::StorageGb,
            Column::Os,
        ]
    }

    /// Returns the CSV header name.
    pub fn header(&self) -> &'static str {
        match self {
            Column::ServerName => "Server_Name",
            Column::CpuCores => "CPU_Cores",
            Column::MemoryGb => "Memory_GB",
            Column::StorageGb => "Storage_GB",
            Column::Os => "OS",
            Column::ApplicationCount => "Application_Count",
            Column::StorageType => "Storage_Type",
            Column::UtilizationCpu => "Utilization_CPU",
        }
    }

    /// Looks up a column by header name, ignoring case and surrounding whitespace.
    pub fn from_header(header: &str) -> Option<Column> {
        let header = header.trim();
        Self::all()
            .iter()
            .find(|c| c.header().eq_ignore_ascii_case(header))
            .copied()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}
