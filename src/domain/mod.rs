//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `inventory` - Server inventory model
//! - `validation` - Data-quality and schema checks
//! - `recommendation` - Analyzers, engine and ROI projection
//! - `workflow` - Per-program stage state machine
//! - `report` - Report assembly and export views
//! - `session` - Per-operator assessment context
//! - `assistant` - Question intent classification

pub mod assistant;
pub mod foundation;
pub mod inventory;
pub mod recommendation;
pub mod report;
pub mod session;
pub mod validation;
pub mod workflow;
