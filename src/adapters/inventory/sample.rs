//! Seeded sample inventories for demos and tests.
//!
//! Never used on the computation path; the engine only sees inventories
//! handed to it as stage evidence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::inventory::{Column, Inventory, InventoryError, ServerRecord, StorageType};
use crate::ports::InventorySource;

/// Shape of the generated estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleProfile {
    /// Windows and Linux mix with SSD/HDD/SAN storage.
    #[default]
    General,
    /// Windows, Linux and containers with CPU utilization readings.
    MultiPlatform,
    /// Windows file servers with large SAN and HDD volumes.
    WindowsFileServers,
}

impl SampleProfile {
    pub fn default_count(&self) -> usize {
        match self {
            SampleProfile::General => 50,
            SampleProfile::MultiPlatform => 100,
            SampleProfile::WindowsFileServers => 15,
        }
    }

    fn columns(&self) -> Vec<Column> {
        let mut columns = Column::core().to_vec();
        match self {
            SampleProfile::General => {
                columns.extend([Column::ApplicationCount, Column::StorageType]);
            }
            SampleProfile::MultiPlatform => columns.push(Column::UtilizationCpu),
            SampleProfile::WindowsFileServers => {
                columns.extend([Column::StorageType, Column::UtilizationCpu]);
            }
        }
        columns
    }
}

const GENERAL_OS: &[&str] = &[
    "Windows Server 2019",
    "Windows Server 2016",
    "Linux Ubuntu 20.04",
    "Linux CentOS 7",
];

const MULTI_PLATFORM_OS: &[&str] = &[
    "Windows Server 2019",
    "Windows Server 2016",
    "Linux Ubuntu 20.04",
    "Linux CentOS 7",
    "Linux RHEL 8",
    "Container (Docker)",
];

const FILE_SERVER_PREFIXES: &[&str] = &[
    "Finance", "HR", "Engineering", "Marketing", "Archive", "Backup", "Shared",
];

/// `InventorySource` producing a deterministic synthetic inventory.
///
/// The same seed, count and profile always yield the same inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleInventoryGenerator {
    seed: u64,
    count: usize,
    profile: SampleProfile,
}

impl SampleInventoryGenerator {
    pub fn new(profile: SampleProfile, seed: u64) -> Self {
        Self {
            seed,
            count: profile.default_count(),
            profile,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn generate(&self) -> Result<Inventory, InventoryError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let records = (0..self.count)
            .map(|i| match self.profile {
                SampleProfile::General => general_server(&mut rng, i),
                SampleProfile::MultiPlatform => multi_platform_server(&mut rng, i),
                SampleProfile::WindowsFileServers => file_server(&mut rng, i),
            })
            .collect();

        Inventory::new(self.profile.columns(), records)
    }
}

impl InventorySource for SampleInventoryGenerator {
    fn load(&self) -> Result<Inventory, InventoryError> {
        self.generate()
    }

    fn describe(&self) -> String {
        format!(
            "sample inventory ({:?}, {} servers, seed {})",
            self.profile, self.count, self.seed
        )
    }
}

fn pick<T: Copy>(rng: &mut StdRng, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

fn general_server(rng: &mut StdRng, i: usize) -> ServerRecord {
    ServerRecord::new(format!("Server{:03}", i + 1), pick(rng, GENERAL_OS))
        .with_cpu_cores(pick(rng, &[2, 4, 8, 16]))
        .with_memory_gb(pick(rng, &[8.0, 16.0, 32.0, 64.0]))
        .with_storage(
            pick(rng, &[100.0, 500.0, 1000.0, 2000.0]),
            pick(rng, &[StorageType::Ssd, StorageType::Hdd, StorageType::San]),
        )
        .with_application_count(rng.gen_range(1..=5))
}

fn multi_platform_server(rng: &mut StdRng, i: usize) -> ServerRecord {
    ServerRecord::new(format!("Server{:03}", i + 1), pick(rng, MULTI_PLATFORM_OS))
        .with_cpu_cores(pick(rng, &[2, 4, 8, 16, 32]))
        .with_memory_gb(pick(rng, &[8.0, 16.0, 32.0, 64.0, 128.0]))
        .with_storage_gb(pick(rng, &[100.0, 500.0, 1000.0, 2000.0, 4000.0]))
        .with_utilization(Percentage::new(rng.gen_range(10..=90)))
}

fn file_server(rng: &mut StdRng, i: usize) -> ServerRecord {
    let name = match FILE_SERVER_PREFIXES.get(i) {
        Some(prefix) => format!("{}-FS-{:02}", prefix, i + 1),
        None => format!("FileServer-{:02}", i + 1),
    };
    ServerRecord::new(name, pick(rng, &["Windows Server 2019", "Windows Server 2016"]))
        .with_cpu_cores(pick(rng, &[4, 8]))
        .with_memory_gb(pick(rng, &[16.0, 32.0]))
        .with_storage(
            pick(rng, &[500.0, 1000.0, 2000.0, 4000.0, 8000.0]),
            pick(rng, &[StorageType::San, StorageType::San, StorageType::Hdd, StorageType::Ssd]),
        )
        .with_utilization(Percentage::new(rng.gen_range(50..=90)))
}
