//! Recommendation - a single prioritized, quantified savings opportunity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Money;

/// Priority level of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns all priorities from most to least urgent.
    pub fn all() -> &'static [Priority] {
        &[
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ]
    }

    /// Numeric urgency; higher is more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 3,
            Priority::High => 2,
            Priority::Medium => 1,
            Priority::Low => 0,
        }
    }

    /// Returns the next more urgent priority, saturating at Critical.
    pub fn promoted(&self) -> Priority {
        match self {
            Priority::Critical | Priority::High => Priority::Critical,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }

    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Implementation effort of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

/// Risk of applying a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Risk {
    None,
    Low,
    Medium,
    High,
}

/// Which analyzer produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RightSizing,
    Licensing,
    StorageTiering,
    ReservedCapacity,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::RightSizing => "Right-sizing",
            Category::Licensing => "Licensing",
            Category::StorageTiering => "Storage Tiering",
            Category::ReservedCapacity => "Reserved Capacity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A typed recommendation emitted by an analyzer.
///
/// `monthly_impact` is signed: positive values are savings, negative values
/// are cost increases (for example upsizing constrained servers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: Category,
    pub description: String,
    pub monthly_impact: Money,
    pub implementation_effort: Effort,
    pub timeline: String,
    pub risk: Risk,
}

impl Recommendation {
    /// Returns the same recommendation one priority level more urgent.
    pub fn promoted(mut self) -> Self {
        self.priority = self.priority.promoted();
        self
    }

    /// Twelve months of impact.
    pub fn annual_impact(&self) -> Money {
        self.monthly_impact.annualized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(priority: Priority) -> Recommendation {
        Recommendation {
            priority,
            category: Category::Licensing,
            description: "Apply hybrid licensing".to_string(),
            monthly_impact: Money::from_cents(10_000),
            implementation_effort: Effort::Low,
            timeline: "Immediate".to_string(),
            risk: Risk::None,
        }
    }

    #[test]
    fn rank_orders_by_urgency() {
        assert!(Priority::Critical.rank() > Priority::High.rank());
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn promoted_saturates_at_critical() {
        assert_eq!(Priority::Low.promoted(), Priority::Medium);
        assert_eq!(Priority::High.promoted(), Priority::Critical);
        assert_eq!(Priority::Critical.promoted(), Priority::Critical);
    }

    #[test]
    fn recommendation_promoted_keeps_other_fields() {
        let rec = sample(Priority::Medium).promoted();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.monthly_impact.cents(), 10_000);
    }

    #[test]
    fn annual_impact_is_twelve_months() {
        assert_eq!(sample(Priority::Low).annual_impact().cents(), 120_000);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::ReservedCapacity).unwrap();
        assert_eq!(json, "\"reserved_capacity\"");
    }
}
