//! AssessmentReport - the exportable result of a completed assessment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Money;
use crate::domain::inventory::{OsFamily, PlatformCategory};
use crate::domain::recommendation::{Priority, RecommendationSet, RoiProjection};
use crate::domain::validation::ValidationReport;
use crate::domain::workflow::{AssessmentProfile, Program};

/// Headline figures for the executive view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub customer: String,
    pub program: Program,
    pub total_records: usize,
    pub recommendation_count: usize,
    pub total_monthly_impact: Money,
    /// Always twelve times `total_monthly_impact`.
    pub total_annual_impact: Money,
    /// Every priority present, zero counts included.
    pub count_by_priority: BTreeMap<Priority, usize>,
    pub counts_by_os_family: BTreeMap<OsFamily, usize>,
    /// Multi-platform portfolio breakdown; only platforms with servers appear.
    pub counts_by_platform: BTreeMap<PlatformCategory, usize>,
    pub data_quality_issue_count: usize,
}

/// Profile, validation findings, recommendations and ROI in one structure.
///
/// Every export view is a projection of this; none recomputes anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub summary: ExecutiveSummary,
    pub profile: AssessmentProfile,
    pub validation: ValidationReport,
    pub recommendations: RecommendationSet,
    pub roi: RoiProjection,
}
