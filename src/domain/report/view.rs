//! Export views over an assessment report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{AssessmentReport, ExecutiveSummary};
use crate::domain::foundation::{Money, ValidationError};
use crate::domain::recommendation::{Category, Recommendation, RoiProjection};
use crate::domain::validation::{DataQualityIssue, ValidationReport};
use crate::domain::workflow::AssessmentProfile;

/// Number of recommendations shown in the executive view.
pub const EXECUTIVE_TOP_N: usize = 5;

/// Presentation variant selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportView {
    /// The whole report.
    #[default]
    Full,
    Executive,
    Technical,
    CostModel,
}

impl ReportView {
    pub fn all() -> &'static [ReportView] {
        &[
            ReportView::Full,
            ReportView::Executive,
            ReportView::Technical,
            ReportView::CostModel,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportView::Full => "full",
            ReportView::Executive => "executive",
            ReportView::Technical => "technical",
            ReportView::CostModel => "cost_model",
        }
    }
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ReportView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ReportView::all()
            .iter()
            .find(|v| v.name() == normalized)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "view",
                    format!("expected full, executive, technical or cost-model, got '{}'", s),
                )
            })
    }
}

#[derive(Debug, Serialize)]
pub struct ExecutiveProjection<'a> {
    pub summary: &'a ExecutiveSummary,
    pub top_recommendations: &'a [Recommendation],
}

#[derive(Debug, Serialize)]
pub struct TechnicalProjection<'a> {
    pub profile: &'a AssessmentProfile,
    pub validation: &'a ValidationReport,
    pub data_quality_issues: Vec<String>,
    pub recommendations: &'a [Recommendation],
}

#[derive(Debug, Serialize)]
pub struct CostModelProjection<'a> {
    pub total_monthly_impact: Money,
    pub total_annual_impact: Money,
    pub impact_by_category: BTreeMap<Category, Money>,
    pub roi: &'a RoiProjection,
}

/// A borrowed projection of a report, ready for serialization.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportProjection<'a> {
    Full(&'a AssessmentReport),
    Executive(ExecutiveProjection<'a>),
    Technical(TechnicalProjection<'a>),
    CostModel(CostModelProjection<'a>),
}

impl AssessmentReport {
    /// Projects the report for the given view.
    pub fn view(&self, view: ReportView) -> ReportProjection<'_> {
        let recommendations = self.recommendations.as_slice();
        match view {
            ReportView::Full => ReportProjection::Full(self),
            ReportView::Executive => ReportProjection::Executive(ExecutiveProjection {
                summary: &self.summary,
                top_recommendations: &recommendations[..recommendations.len().min(EXECUTIVE_TOP_N)],
            }),
            ReportView::Technical => ReportProjection::Technical(TechnicalProjection {
                profile: &self.profile,
                validation: &self.validation,
                data_quality_issues: self
                    .validation
                    .issues()
                    .iter()
                    .map(DataQualityIssue::description)
                    .collect(),
                recommendations,
            }),
            ReportView::CostModel => ReportProjection::CostModel(CostModelProjection {
                total_monthly_impact: self.summary.total_monthly_impact,
                total_annual_impact: self.summary.total_annual_impact,
                impact_by_category: self.recommendations.impact_by_category(),
                roi: &self.roi,
            }),
        }
    }
}
