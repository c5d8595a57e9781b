//! Recommendation module - analyzers, the engine and ROI projection.
//!
//! Every analyzer is a pure function of the inventory and a set of
//! configurable rates and thresholds. Money is kept in integer cents so
//! totals do not depend on iteration order.

mod analyzer;
mod engine;
mod licensing;
mod rates;
#[allow(clippy::module_inception)]
mod recommendation;
mod reserved_capacity;
mod right_sizing;
mod roi;
mod set;
mod storage_tiering;

pub use analyzer::Analyzer;
pub use engine::RecommendationEngine;
pub use licensing::LicensingAnalyzer;
pub use rates::{RateCard, Thresholds};
pub use recommendation::{Category, Effort, Priority, Recommendation, Risk};
pub use reserved_capacity::{ReservedCapacityAnalyzer, SizeClass};
pub use right_sizing::{ProvisioningBucket, RightSizingAnalyzer};
pub use roi::{Phase, PhaseProjection, RoiProjection, RoiProjector};
pub use set::RecommendationSet;
pub use storage_tiering::{StorageTarget, StorageTieringAnalyzer};
