//! Reserved capacity analyzer - commitment discounts for groups of similar
//! servers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Analyzer, Category, Effort, Priority, RateCard, Recommendation, Risk, Thresholds};
use crate::domain::foundation::Money;
use crate::domain::inventory::{Inventory, ServerRecord};

/// Instance size class derived from cores and memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    XLarge,
}

impl SizeClass {
    /// Size class of a record: the larger of the class implied by its cores
    /// and the class implied by its memory. `None` when both are unknown.
    pub fn of(record: &ServerRecord) -> Option<SizeClass> {
        let by_cores = record.cpu_cores.map(|cores| match cores {
            0..=2 => SizeClass::Small,
            3..=4 => SizeClass::Medium,
            5..=8 => SizeClass::Large,
            _ => SizeClass::XLarge,
        });
        let by_memory = record.memory_gb.map(|gb| {
            if gb <= 8.0 {
                SizeClass::Small
            } else if gb <= 16.0 {
                SizeClass::Medium
            } else if gb <= 32.0 {
                SizeClass::Large
            } else {
                SizeClass::XLarge
            }
        });

        match (by_cores, by_memory) {
            (Some(c), Some(m)) => Some(c.max(m)),
            (c, m) => c.or(m),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
            SizeClass::XLarge => "xlarge",
        }
    }
}

pub struct ReservedCapacityAnalyzer {
    min_group: usize,
    rates: [Money; 4],
}

impl ReservedCapacityAnalyzer {
    pub fn new(rates: &RateCard, thresholds: &Thresholds) -> Self {
        Self {
            min_group: thresholds.reserved_min_group,
            rates: [
                rates.reserved_small_per_server,
                rates.reserved_medium_per_server,
                rates.reserved_large_per_server,
                rates.reserved_xlarge_per_server,
            ],
        }
    }

    fn discount(&self, class: SizeClass) -> Money {
        match class {
            SizeClass::Small => self.rates[0],
            SizeClass::Medium => self.rates[1],
            SizeClass::Large => self.rates[2],
            SizeClass::XLarge => self.rates[3],
        }
    }
}

impl Analyzer for ReservedCapacityAnalyzer {
    fn analyze(&self, inventory: &Inventory) -> Vec<Recommendation> {
        let mut groups: BTreeMap<SizeClass, usize> = BTreeMap::new();
        for class in inventory.iter().filter_map(SizeClass::of) {
            *groups.entry(class).or_insert(0) += 1;
        }

        groups
            .into_iter()
            .filter(|(_, size)| *size >= self.min_group)
            .map(|(class, size)| Recommendation {
                priority: Priority::Medium,
                category: Category::ReservedCapacity,
                description: format!(
                    "Purchase reserved capacity for {} {} servers",
                    size,
                    class.label()
                ),
                monthly_impact: self.discount(class) * size as i64,
                implementation_effort: Effort::Low,
                timeline: "Immediate".to_string(),
                risk: Risk::Low,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(name: &str, cores: u32, memory: f64) -> ServerRecord {
        ServerRecord::new(name, "Linux")
            .with_cpu_cores(cores)
            .with_memory_gb(memory)
    }

    fn analyzer() -> ReservedCapacityAnalyzer {
        ReservedCapacityAnalyzer::new(&RateCard::default(), &Thresholds::default())
    }

    #[test]
    fn size_class_takes_larger_dimension() {
        assert_eq!(SizeClass::of(&server("a", 2, 8.0)), Some(SizeClass::Small));
        assert_eq!(SizeClass::of(&server("b", 2, 12.0)), Some(SizeClass::Medium));
        assert_eq!(SizeClass::of(&server("c", 8, 4.0)), Some(SizeClass::Large));
        assert_eq!(SizeClass::of(&server("d", 16, 64.0)), Some(SizeClass::XLarge));
    }

    #[test]
    fn size_class_uses_single_known_dimension() {
        let cores_only = ServerRecord::new("a", "Linux").with_cpu_cores(4);
        let memory_only = ServerRecord::new("b", "Linux").with_memory_gb(30.0);
        let neither = ServerRecord::new("c", "Linux");

        assert_eq!(SizeClass::of(&cores_only), Some(SizeClass::Medium));
        assert_eq!(SizeClass::of(&memory_only), Some(SizeClass::Large));
        assert_eq!(SizeClass::of(&neither), None);
    }

    #[test]
    fn groups_below_minimum_are_ignored() {
        let inventory = Inventory::with_full_schema(vec![
            server("a", 2, 4.0),
            server("b", 2, 4.0),
            server("c", 2, 4.0),
            server("d", 16, 64.0),
            server("e", 16, 64.0),
        ])
        .unwrap();

        let recs = analyzer().analyze(&inventory);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].monthly_impact, Money::from_cents(4_500));
        assert!(recs[0].description.contains("3 small"));
    }
}
