//! Inventory Module - the server inventory model.
//!
//! # Components
//!
//! - `Column` - Schema columns and their CSV header names
//! - `ServerRecord` - One server row with optional attributes
//! - `OsFamily` / `PlatformCategory` - Classifications derived from the OS string
//! - `Inventory` - Immutable ordered collection of records plus header columns

mod column;
mod errors;
#[allow(clippy::module_inception)]
mod inventory;
mod os_family;
mod record;

pub use column::Column;
pub use errors::InventoryError;
pub use inventory::Inventory;
pub use os_family::{OsFamily, PlatformCategory};
pub use record::{ServerRecord, StorageType};
