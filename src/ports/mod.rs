//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - Async persistence of assessment sessions
//! - `InventorySource` - Loading a server inventory

mod inventory_source;
mod session_repository;

pub use inventory_source::InventorySource;
pub use session_repository::SessionRepository;
