//! Storage tiering analyzer - maps current storage to a cheaper target tier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Analyzer, Category, Effort, Priority, RateCard, Recommendation, Risk, Thresholds};
use crate::domain::foundation::Money;
use crate::domain::inventory::{Inventory, ServerRecord, StorageType};

/// Target storage tier. Declaration order is emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTarget {
    ManagedFileService,
    IntelligentTiering,
    ArchiveObjectStorage,
    BlockStorageGp3,
}

impl StorageTarget {
    pub fn label(&self) -> &'static str {
        match self {
            StorageTarget::ManagedFileService => "managed file service",
            StorageTarget::IntelligentTiering => "intelligent-tiering object storage",
            StorageTarget::ArchiveObjectStorage => "archival object storage",
            StorageTarget::BlockStorageGp3 => "general-purpose block storage (gp3)",
        }
    }

    fn effort(&self) -> Effort {
        match self {
            StorageTarget::BlockStorageGp3 => Effort::Low,
            StorageTarget::ManagedFileService | StorageTarget::IntelligentTiering => Effort::Medium,
            StorageTarget::ArchiveObjectStorage => Effort::High,
        }
    }

    fn timeline(&self) -> &'static str {
        match self {
            StorageTarget::BlockStorageGp3 => "Immediate",
            StorageTarget::ManagedFileService | StorageTarget::IntelligentTiering => "1-3 months",
            StorageTarget::ArchiveObjectStorage => "3-6 months",
        }
    }

    fn risk(&self) -> Risk {
        match self {
            StorageTarget::BlockStorageGp3 | StorageTarget::IntelligentTiering => Risk::Low,
            StorageTarget::ManagedFileService | StorageTarget::ArchiveObjectStorage => Risk::Medium,
        }
    }
}

pub struct StorageTieringAnalyzer {
    archive_min_gb: f64,
    managed_file_per_gb: f64,
    intelligent_tiering_per_gb: f64,
    archive_per_gb: f64,
    block_storage_per_gb: f64,
}

impl StorageTieringAnalyzer {
    pub fn new(rates: &RateCard, thresholds: &Thresholds) -> Self {
        Self {
            archive_min_gb: thresholds.archive_min_gb,
            managed_file_per_gb: rates.managed_file_savings_per_gb,
            intelligent_tiering_per_gb: rates.intelligent_tiering_savings_per_gb,
            archive_per_gb: rates.archive_savings_per_gb,
            block_storage_per_gb: rates.block_storage_savings_per_gb,
        }
    }

    /// Target tier for a record, or `None` when type or capacity is unknown.
    pub fn target_for(&self, record: &ServerRecord) -> Option<StorageTarget> {
        let capacity = record.storage_gb?;
        let target = match record.storage_type? {
            StorageType::San if capacity >= self.archive_min_gb => {
                StorageTarget::ArchiveObjectStorage
            }
            StorageType::San => StorageTarget::BlockStorageGp3,
            StorageType::Ssd => StorageTarget::ManagedFileService,
            StorageType::Hdd | StorageType::Other => StorageTarget::IntelligentTiering,
        };
        Some(target)
    }

    fn savings_per_gb(&self, target: StorageTarget) -> f64 {
        match target {
            StorageTarget::ManagedFileService => self.managed_file_per_gb,
            StorageTarget::IntelligentTiering => self.intelligent_tiering_per_gb,
            StorageTarget::ArchiveObjectStorage => self.archive_per_gb,
            StorageTarget::BlockStorageGp3 => self.block_storage_per_gb,
        }
    }
}

#[derive(Default)]
struct TierTotal {
    servers: usize,
    capacity_gb: f64,
}

impl Analyzer for StorageTieringAnalyzer {
    fn analyze(&self, inventory: &Inventory) -> Vec<Recommendation> {
        let mut totals: BTreeMap<StorageTarget, TierTotal> = BTreeMap::new();
        for record in inventory.iter() {
            let (Some(target), Some(capacity)) = (self.target_for(record), record.storage_gb)
            else {
                continue;
            };
            let total = totals.entry(target).or_default();
            total.servers += 1;
            total.capacity_gb += capacity;
        }

        totals
            .into_iter()
            .map(|(target, total)| Recommendation {
                priority: Priority::Medium,
                category: Category::StorageTiering,
                description: format!(
                    "Move {:.0} GB across {} servers to {}",
                    total.capacity_gb,
                    total.servers,
                    target.label()
                ),
                monthly_impact: Money::from_dollars(total.capacity_gb * self.savings_per_gb(target)),
                implementation_effort: target.effort(),
                timeline: target.timeline().to_string(),
                risk: target.risk(),
            })
            .collect()
    }
}
