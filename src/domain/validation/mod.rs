//! Validation Module - data-quality metrics and schema compliance.
//!
//! Structural problems (a required column absent from the header) fail with
//! `SchemaError`. Empty cells in present columns are aggregated into
//! `DataQualityIssue` entries on a successful `ValidationReport`.

mod report;
mod validator;

pub use report::{DataQualityIssue, ValidationReport};
pub use validator::{InventoryValidator, SchemaError};
