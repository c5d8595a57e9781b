//! Recommendation engine - runs every analyzer and orders the result.

use super::{
    Analyzer, LicensingAnalyzer, RateCard, Recommendation, RecommendationSet,
    ReservedCapacityAnalyzer, RightSizingAnalyzer, StorageTieringAnalyzer, Thresholds,
};
use crate::domain::inventory::Inventory;
use crate::domain::workflow::AssessmentProfile;

/// Runs the analyzers in a fixed order: right-sizing, licensing, storage
/// tiering, reserved capacity.
pub struct RecommendationEngine {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl RecommendationEngine {
    pub fn new(rates: RateCard, thresholds: Thresholds) -> Self {
        let analyzers: Vec<Box<dyn Analyzer>> = vec![
            Box::new(RightSizingAnalyzer::new(&rates, &thresholds)),
            Box::new(LicensingAnalyzer::new(&rates)),
            Box::new(StorageTieringAnalyzer::new(&rates, &thresholds)),
            Box::new(ReservedCapacityAnalyzer::new(&rates, &thresholds)),
        ];
        Self { analyzers }
    }

    /// Computes the ordered recommendation set for an inventory.
    ///
    /// Recommendations in a category the profile's program emphasizes are
    /// promoted one priority level when they carry a positive impact.
    pub fn compute(&self, inventory: &Inventory, profile: &AssessmentProfile) -> RecommendationSet {
        let emphasized = profile.program.emphasized_categories();

        let items: Vec<Recommendation> = self
            .analyzers
            .iter()
            .flat_map(|analyzer| analyzer.analyze(inventory))
            .map(|rec| {
                if emphasized.contains(&rec.category) && rec.monthly_impact.is_saving() {
                    rec.promoted()
                } else {
                    rec
                }
            })
            .collect();

        RecommendationSet::from_unsorted(items)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RateCard::default(), Thresholds::default())
    }
}
