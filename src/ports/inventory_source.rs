//! Inventory source port - where an inventory comes from.
//!
//! Loading is synchronous: sources are local files or generators, and the
//! result is handed to the workflow as stage evidence.

use crate::domain::inventory::{Inventory, InventoryError};

/// Port for producing an `Inventory`.
///
/// # Contract
///
/// Implementations must:
/// - Report which columns were present, so schema checks can run
/// - Return the same inventory for the same input
/// - Fail with `InventoryError` rather than returning partial data
pub trait InventorySource: Send + Sync {
    /// Load the inventory.
    fn load(&self) -> Result<Inventory, InventoryError>;

    /// Short human-readable description of the source, for logs.
    fn describe(&self) -> String;
}
