//! Pricing configuration - unit costs used by the analyzers

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Money;
use crate::domain::recommendation::RateCard;

/// Monthly unit costs in dollars.
///
/// Per-server and per-core rates are rounded to whole cents when converted
/// into a `RateCard`; per-GB rates stay fractional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    pub rightsize_savings_per_server: f64,
    pub upsize_cost_per_server: f64,
    pub hybrid_benefit_per_core: f64,
    pub managed_file_savings_per_gb: f64,
    pub intelligent_tiering_savings_per_gb: f64,
    pub archive_savings_per_gb: f64,
    pub block_storage_savings_per_gb: f64,
    pub reserved_small_per_server: f64,
    pub reserved_medium_per_server: f64,
    pub reserved_large_per_server: f64,
    pub reserved_xlarge_per_server: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rightsize_savings_per_server: 90.0,
            upsize_cost_per_server: 45.0,
            hybrid_benefit_per_core: 10.0,
            managed_file_savings_per_gb: 0.37,
            intelligent_tiering_savings_per_gb: 0.22,
            archive_savings_per_gb: 0.246,
            block_storage_savings_per_gb: 0.02,
            reserved_small_per_server: 15.0,
            reserved_medium_per_server: 30.0,
            reserved_large_per_server: 55.0,
            reserved_xlarge_per_server: 110.0,
        }
    }
}

/// Largest accepted rate in dollars.
const MAX_RATE: f64 = 1_000_000.0;

impl PricingConfig {
    fn rates(&self) -> [(&'static str, f64); 11] {
        [
            ("rightsize_savings_per_server", self.rightsize_savings_per_server),
            ("upsize_cost_per_server", self.upsize_cost_per_server),
            ("hybrid_benefit_per_core", self.hybrid_benefit_per_core),
            ("managed_file_savings_per_gb", self.managed_file_savings_per_gb),
            ("intelligent_tiering_savings_per_gb", self.intelligent_tiering_savings_per_gb),
            ("archive_savings_per_gb", self.archive_savings_per_gb),
            ("block_storage_savings_per_gb", self.block_storage_savings_per_gb),
            ("reserved_small_per_server", self.reserved_small_per_server),
            ("reserved_medium_per_server", self.reserved_medium_per_server),
            ("reserved_large_per_server", self.reserved_large_per_server),
            ("reserved_xlarge_per_server", self.reserved_xlarge_per_server),
        ]
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self
            .rates()
            .iter()
            .find(|(_, rate)| !(0.0..=MAX_RATE).contains(rate))
        {
            Some((name, _)) => Err(ValidationError::InvalidRate(name)),
            None => Ok(()),
        }
    }

    /// Converts into the analyzers' rate card.
    pub fn to_rate_card(&self) -> RateCard {
        RateCard {
            rightsize_savings_per_server: Money::from_dollars(self.rightsize_savings_per_server),
            upsize_cost_per_server: Money::from_dollars(self.upsize_cost_per_server),
            hybrid_benefit_per_core: Money::from_dollars(self.hybrid_benefit_per_core),
            managed_file_savings_per_gb: self.managed_file_savings_per_gb,
            intelligent_tiering_savings_per_gb: self.intelligent_tiering_savings_per_gb,
            archive_savings_per_gb: self.archive_savings_per_gb,
            block_storage_savings_per_gb: self.block_storage_savings_per_gb,
            reserved_small_per_server: Money::from_dollars(self.reserved_small_per_server),
            reserved_medium_per_server: Money::from_dollars(self.reserved_medium_per_server),
            reserved_large_per_server: Money::from_dollars(self.reserved_large_per_server),
            reserved_xlarge_per_server: Money::from_dollars(self.reserved_xlarge_per_server),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rate_card_defaults() {
        assert_eq!(PricingConfig::default().to_rate_card(), RateCard::default());
    }

    #[test]
    fn negative_rate_is_rejected() {
        let config = PricingConfig {
            hybrid_benefit_per_core: -1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidRate("hybrid_benefit_per_core"))
        );
    }

    #[test]
    fn oversized_rate_is_rejected() {
        let config = PricingConfig {
            managed_file_savings_per_gb: 1e15,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidRate("managed_file_savings_per_gb"))
        );

        let nan = PricingConfig {
            upsize_cost_per_server: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            nan.validate(),
            Err(ValidationError::InvalidRate("upsize_cost_per_server"))
        );
    }

    #[test]
    fn partial_deserialization_keeps_defaults() {
        let json = r#"{ "hybrid_benefit_per_core": 12.5 }"#;
        let config: PricingConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.hybrid_benefit_per_core, 12.5);
        assert_eq!(config.upsize_cost_per_server, 45.0);
        assert_eq!(
            config.to_rate_card().hybrid_benefit_per_core,
            Money::from_cents(1_250)
        );
    }
}
