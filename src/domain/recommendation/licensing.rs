//! Licensing analyzer - hybrid-benefit eligibility for Windows servers.

use super::{Analyzer, Category, Effort, Priority, RateCard, Recommendation, Risk};
use crate::domain::foundation::Money;
use crate::domain::inventory::{Inventory, OsFamily, ServerRecord};

/// Emits a single hybrid-benefit recommendation covering every eligible
/// Windows core.
pub struct LicensingAnalyzer {
    benefit_per_core: Money,
}

impl LicensingAnalyzer {
    pub fn new(rates: &RateCard) -> Self {
        Self {
            benefit_per_core: rates.hybrid_benefit_per_core,
        }
    }

    /// Windows servers with a known, non-zero core count.
    pub fn is_eligible(record: &ServerRecord) -> bool {
        record.os_family() == OsFamily::Windows && record.cpu_cores.is_some_and(|c| c > 0)
    }
}

impl Analyzer for LicensingAnalyzer {
    fn analyze(&self, inventory: &Inventory) -> Vec<Recommendation> {
        let (servers, cores) = inventory
            .iter()
            .filter(|r| Self::is_eligible(r))
            .fold((0usize, 0i64), |(servers, cores), r| {
                (servers + 1, cores + i64::from(r.cpu_cores.unwrap_or(0)))
            });

        if servers == 0 {
            return Vec::new();
        }

        vec![Recommendation {
            priority: Priority::High,
            category: Category::Licensing,
            description: format!(
                "Apply hybrid licensing benefit to {} Windows servers ({} cores)",
                servers, cores
            ),
            monthly_impact: self.benefit_per_core * cores,
            implementation_effort: Effort::Low,
            timeline: "Immediate".to_string(),
            risk: Risk::None,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> LicensingAnalyzer {
        LicensingAnalyzer::new(&RateCard::default())
    }

    #[test]
    fn sums_cores_of_eligible_windows_servers() {
        let inventory = Inventory::with_full_schema(vec![
            ServerRecord::new("web01", "Windows Server 2019").with_cpu_cores(4),
            ServerRecord::new("db01", "Windows Server 2016").with_cpu_cores(8),
            ServerRecord::new("app01", "Ubuntu 20.04").with_cpu_cores(16),
        ])
        .unwrap();

        let recs = analyzer().analyze(&inventory);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].monthly_impact, Money::from_cents(12_000));
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].risk, Risk::None);
        assert!(recs[0].description.contains("2 Windows servers"));
    }

    #[test]
    fn unknown_or_zero_cores_are_not_eligible() {
        let inventory = Inventory::with_full_schema(vec![
            ServerRecord::new("a", "Windows Server 2012"),
            ServerRecord::new("b", "windows 2008").with_cpu_cores(0),
        ])
        .unwrap();

        assert!(analyzer().analyze(&inventory).is_empty());
        assert!(inventory.iter().all(|r| !LicensingAnalyzer::is_eligible(r)));
    }

    #[test]
    fn no_windows_servers_yields_nothing() {
        let inventory = Inventory::with_full_schema(vec![
            ServerRecord::new("a", "RHEL 8").with_cpu_cores(4),
        ])
        .unwrap();

        assert!(analyzer().analyze(&inventory).is_empty());
    }
}
