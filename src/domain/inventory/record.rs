//! ServerRecord - one row of the server inventory.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Column, OsFamily};
use crate::domain::foundation::Percentage;

/// Kind of storage backing a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StorageType {
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "HDD")]
    Hdd,
    #[serde(rename = "SAN")]
    San,
    #[serde(rename = "Other")]
    Other,
}

impl StorageType {
    /// Parses a storage type cell.
    ///
    /// Empty cells are absent; unrecognized text is `Other`.
    pub fn parse(value: &str) -> Option<StorageType> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(match value.to_ascii_uppercase().as_str() {
            "SSD" => StorageType::Ssd,
            "HDD" => StorageType::Hdd,
            "SAN" => StorageType::San,
            _ => StorageType::Other,
        })
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StorageType::Ssd => "SSD",
            StorageType::Hdd => "HDD",
            StorageType::San => "SAN",
            StorageType::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

/// A single on-premises server.
///
/// Optional attributes are `None` when the inventory cell was empty or
/// could not be parsed. An empty `name` or `os` counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub name: String,
    pub cpu_cores: Option<u32>,
    pub memory_gb: Option<f64>,
    pub storage_gb: Option<f64>,
    pub os: String,
    pub application_count: Option<u32>,
    pub storage_type: Option<StorageType>,
    pub utilization_cpu: Option<Percentage>,
}

impl ServerRecord {
    /// Creates a record with only a name and OS description.
    pub fn new(name: impl Into<String>, os: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpu_cores: None,
            memory_gb: None,
            storage_gb: None,
            os: os.into(),
            application_count: None,
            storage_type: None,
            utilization_cpu: None,
        }
    }

    pub fn with_cpu_cores(mut self, cores: u32) -> Self {
        self.cpu_cores = Some(cores);
        self
    }

    pub fn with_memory_gb(mut self, gb: f64) -> Self {
        self.memory_gb = Some(gb);
        self
    }

    pub fn with_storage(mut self, gb: f64, storage_type: StorageType) -> Self {
        self.storage_gb = Some(gb);
        self.storage_type = Some(storage_type);
        self
    }

    pub fn with_storage_gb(mut self, gb: f64) -> Self {
        self.storage_gb = Some(gb);
        self
    }

    pub fn with_application_count(mut self, count: u32) -> Self {
        self.application_count = Some(count);
        self
    }

    pub fn with_utilization(mut self, utilization: Percentage) -> Self {
        self.utilization_cpu = Some(utilization);
        self
    }

    /// Returns the OS family derived from the `os` string.
    pub fn os_family(&self) -> OsFamily {
        OsFamily::classify(&self.os)
    }

    /// Returns true if this record carries a value for the given column.
    pub fn has_value(&self, column: Column) -> bool {
        match column {
            Column::ServerName => !self.name.trim().is_empty(),
            Column::CpuCores => self.cpu_cores.is_some(),
            Column::MemoryGb => self.memory_gb.is_some(),
            Column::StorageGb => self.storage_gb.is_some(),
            Column::Os => !self.os.trim().is_empty(),
            Column::ApplicationCount => self.application_count.is_some(),
            Column::StorageType => self.storage_type.is_some(),
            Column::UtilizationCpu => self.utilization_cpu.is_some(),
        }
    }
}
