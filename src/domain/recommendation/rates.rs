//! Unit-cost constants and classification thresholds for the analyzers.

use crate::domain::foundation::{Money, Percentage};

/// Monthly unit costs and savings used to quantify recommendations.
///
/// Per-server and per-core figures are whole-dollar amounts; per-GB figures
/// are fractional and applied to aggregate capacity before rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCard {
    /// Savings per over-provisioned server after downsizing.
    pub rightsize_savings_per_server: Money,
    /// Extra cost per under-provisioned server after upsizing.
    pub upsize_cost_per_server: Money,
    /// Hybrid-licensing savings per eligible Windows core.
    pub hybrid_benefit_per_core: Money,
    /// Savings per GB moved to a managed file service.
    pub managed_file_savings_per_gb: f64,
    /// Savings per GB moved to intelligent-tiering object storage.
    pub intelligent_tiering_savings_per_gb: f64,
    /// Savings per GB moved to archival object storage.
    pub archive_savings_per_gb: f64,
    /// Savings per GB moved to general-purpose block storage.
    pub block_storage_savings_per_gb: f64,
    /// Reserved-capacity discount per server, by size class.
    pub reserved_small_per_server: Money,
    pub reserved_medium_per_server: Money,
    pub reserved_large_per_server: Money,
    pub reserved_xlarge_per_server: Money,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            rightsize_savings_per_server: Money::from_cents(9_000),
            upsize_cost_per_server: Money::from_cents(4_500),
            hybrid_benefit_per_core: Money::from_cents(1_000),
            managed_file_savings_per_gb: 0.37,
            intelligent_tiering_savings_per_gb: 0.22,
            archive_savings_per_gb: 0.246,
            block_storage_savings_per_gb: 0.02,
            reserved_small_per_server: Money::from_cents(1_500),
            reserved_medium_per_server: Money::from_cents(3_000),
            reserved_large_per_server: Money::from_cents(5_500),
            reserved_xlarge_per_server: Money::from_cents(11_000),
        }
    }
}

/// Classification thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Utilization strictly below this is over-provisioned.
    pub over_provisioned_below: Percentage,
    /// Utilization strictly above this is under-provisioned.
    pub under_provisioned_above: Percentage,
    /// Minimum servers in a size class before reserved capacity is suggested.
    pub reserved_min_group: usize,
    /// SAN volumes at or above this capacity go to archival storage.
    pub archive_min_gb: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            over_provisioned_below: Percentage::new(20),
            under_provisioned_above: Percentage::new(85),
            reserved_min_group: 3,
            archive_min_gb: 1000.0,
        }
    }
}
