//! Analyzer trait - the seam between the engine and individual analyzers.

use super::Recommendation;
use crate::domain::inventory::Inventory;

/// A pure function from an inventory to zero or more recommendations.
///
/// Implementations must be deterministic: no randomness, no clock, and no
/// iteration over unordered collections when building output.
pub trait Analyzer: Send + Sync {
    /// Analyzes the inventory.
    fn analyze(&self, inventory: &Inventory) -> Vec<Recommendation>;
}
