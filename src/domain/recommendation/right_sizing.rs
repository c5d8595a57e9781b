//! Right-sizing analyzer - utilization-based provisioning classification.

use serde::{Deserialize, Serialize};

use super::{Analyzer, Category, Effort, Priority, RateCard, Recommendation, Risk, Thresholds};
use crate::domain::foundation::{Money, Percentage};
use crate::domain::inventory::{Inventory, ServerRecord};

/// Provisioning classification of a single server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisioningBucket {
    OverProvisioned,
    UnderProvisioned,
    Optimal,
}

/// Classifies servers by CPU utilization and emits one aggregate
/// recommendation per non-empty bucket.
pub struct RightSizingAnalyzer {
    over_below: Percentage,
    under_above: Percentage,
    savings_per_server: Money,
    upsize_cost_per_server: Money,
}

impl RightSizingAnalyzer {
    pub fn new(rates: &RateCard, thresholds: &Thresholds) -> Self {
        Self {
            over_below: thresholds.over_provisioned_below,
            under_above: thresholds.under_provisioned_above,
            savings_per_server: rates.rightsize_savings_per_server,
            upsize_cost_per_server: rates.upsize_cost_per_server,
        }
    }

    /// Classifies one server. Servers without a utilization reading are
    /// excluded rather than defaulted.
    pub fn classify(&self, record: &ServerRecord) -> Option<ProvisioningBucket> {
        let utilization = record.utilization_cpu?;
        Some(if utilization < self.over_below {
            ProvisioningBucket::OverProvisioned
        } else if utilization > self.under_above {
            ProvisioningBucket::UnderProvisioned
        } else {
            ProvisioningBucket::Optimal
        })
    }

    fn count(&self, inventory: &Inventory, bucket: ProvisioningBucket) -> usize {
        inventory
            .iter()
            .filter(|r| self.classify(r) == Some(bucket))
            .count()
    }
}

impl Analyzer for RightSizingAnalyzer {
    fn analyze(&self, inventory: &Inventory) -> Vec<Recommendation> {
        let mut out = Vec::new();

        let over = self.count(inventory, ProvisioningBucket::OverProvisioned);
        if over > 0 {
            out.push(Recommendation {
                priority: Priority::High,
                category: Category::RightSizing,
                description: format!(
                    "Right-size {} over-provisioned servers (CPU utilization below {})",
                    over, self.over_below
                ),
                monthly_impact: self.savings_per_server * over as i64,
                implementation_effort: Effort::Medium,
                timeline: "1-2 months".to_string(),
                risk: Risk::Low,
            });
        }

        let under = self.count(inventory, ProvisioningBucket::UnderProvisioned);
        if under > 0 {
            out.push(Recommendation {
                priority: Priority::Medium,
                category: Category::RightSizing,
                description: format!(
                    "Upsize {} under-provisioned servers (CPU utilization above {})",
                    under, self.under_above
                ),
                monthly_impact: -(self.upsize_cost_per_server * under as i64),
                implementation_effort: Effort::Medium,
                timeline: "Immediate".to_string(),
                risk: Risk::Medium,
            });
        }

        let optimal = self.count(inventory, ProvisioningBucket::Optimal);
        if optimal > 0 {
            out.push(Recommendation {
                priority: Priority::Low,
                category: Category::RightSizing,
                description: format!("Keep current sizing for {} optimally sized servers", optimal),
                monthly_impact: Money::ZERO,
                implementation_effort: Effort::Low,
                timeline: "Ongoing".to_string(),
                risk: Risk::None,
            });
        }

        out
    }
}
