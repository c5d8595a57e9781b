//! Adapters - Implementations of port interfaces.
//!
//! - `inventory` - CSV reader and seeded sample generator (`InventorySource`)
//! - `memory` - In-memory session storage (`SessionRepository`)

pub mod inventory;
pub mod memory;

pub use inventory::{CsvInventoryReader, SampleInventoryGenerator, SampleProfile};
pub use memory::InMemorySessionRepository;
