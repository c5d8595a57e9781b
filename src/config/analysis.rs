//! Analysis configuration - classification thresholds

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Percentage;
use crate::domain::recommendation::Thresholds;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// CPU utilization below this is over-provisioned
    pub over_provisioned_below: u8,

    /// CPU utilization above this is under-provisioned
    pub under_provisioned_above: u8,

    /// Minimum group size for reserved capacity
    pub reserved_min_group: usize,

    /// SAN capacity at which archival storage is suggested
    pub archive_min_gb: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            over_provisioned_below: 20,
            under_provisioned_above: 85,
            reserved_min_group: 3,
            archive_min_gb: 1000.0,
        }
    }
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.over_provisioned_below >= self.under_provisioned_above
            || self.under_provisioned_above > 100
        {
            return Err(ValidationError::InvalidUtilizationBounds);
        }
        if self.reserved_min_group == 0 {
            return Err(ValidationError::InvalidGroupSize);
        }
        if !self.archive_min_gb.is_finite() || self.archive_min_gb < 0.0 {
            return Err(ValidationError::InvalidArchiveThreshold);
        }
        Ok(())
    }

    pub fn to_thresholds(&self) -> Thresholds {
        Thresholds {
            over_provisioned_below: Percentage::new(self.over_provisioned_below),
            under_provisioned_above: Percentage::new(self.under_provisioned_above),
            reserved_min_group: self.reserved_min_group,
            archive_min_gb: self.archive_min_gb,
        }
    }
}
