//! RecommendationSet - recommendations in presentation order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Category, Effort, Priority, Recommendation};
use crate::domain::foundation::Money;

/// Recommendations ordered by priority (most urgent first), then by
/// monthly impact (largest first). Ties keep analyzer emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    items: Vec<Recommendation>,
}

impl RecommendationSet {
    /// Sorts recommendations into set order.
    ///
    /// The sort is stable, so equal keys stay in the order given.
    pub fn from_unsorted(mut items: Vec<Recommendation>) -> Self {
        items.sort_by(|a, b| {
            b.priority
                .rank()
                .cmp(&a.priority.rank())
                .then_with(|| b.monthly_impact.cmp(&a.monthly_impact))
        });
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Recommendation] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all monthly impacts.
    pub fn total_monthly_impact(&self) -> Money {
        self.items.iter().map(|r| r.monthly_impact).sum()
    }

    /// Number of recommendations per priority, every priority present.
    pub fn count_by_priority(&self) -> BTreeMap<Priority, usize> {
        let mut counts: BTreeMap<Priority, usize> =
            Priority::all().iter().map(|p| (*p, 0)).collect();
        for rec in &self.items {
            *counts.entry(rec.priority).or_insert(0) += 1;
        }
        counts
    }

    /// Monthly impact per category, only categories that produced output.
    pub fn impact_by_category(&self) -> BTreeMap<Category, Money> {
        let mut totals = BTreeMap::new();
        for rec in &self.items {
            *totals.entry(rec.category).or_insert(Money::ZERO) += rec.monthly_impact;
        }
        totals
    }

    /// Recommendations with the given implementation effort, in set order.
    pub fn with_effort(&self, effort: Effort) -> impl Iterator<Item = &Recommendation> {
        self.items
            .iter()
            .filter(move |r| r.implementation_effort == effort)
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
