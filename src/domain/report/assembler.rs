//! ReportAssembler - merges stage outputs into an `AssessmentReport`.

use std::collections::BTreeMap;

use super::{AssessmentReport, ExecutiveSummary, ReportError};
use crate::domain::inventory::PlatformCategory;
use crate::domain::recommendation::{RecommendationSet, RoiProjector};
use crate::domain::validation::ValidationReport;
use crate::domain::workflow::{AssessmentProfile, Stage, WorkflowState};

pub struct ReportAssembler;

impl ReportAssembler {
    /// Builds the report once the workflow has reached Results.
    ///
    /// # Errors
    ///
    /// - `IncompleteAssessment` if `stage` is not the final stage
    pub fn assemble(
        stage: Stage,
        profile: &AssessmentProfile,
        validation: &ValidationReport,
        recommendations: &RecommendationSet,
    ) -> Result<AssessmentReport, ReportError> {
        if !stage.is_final() {
            return Err(ReportError::incomplete(
                stage,
                format!("workflow is at stage '{}', not results", stage),
            ));
        }

        let mut counts_by_platform = BTreeMap::new();
        for (family, count) in validation.counts_by_os_family() {
            if *count > 0 {
                *counts_by_platform
                    .entry(PlatformCategory::from(*family))
                    .or_insert(0) += count;
            }
        }

        let total_monthly_impact = recommendations.total_monthly_impact();
        let summary = ExecutiveSummary {
            customer: profile.customer.trim().to_string(),
            program: profile.program,
            total_records: validation.total_records(),
            recommendation_count: recommendations.len(),
            total_monthly_impact,
            total_annual_impact: total_monthly_impact.annualized(),
            count_by_priority: recommendations.count_by_priority(),
            counts_by_os_family: validation.counts_by_os_family().clone(),
            counts_by_platform,
            data_quality_issue_count: validation.issues().len(),
        };

        Ok(AssessmentReport {
            summary,
            profile: profile.clone(),
            validation: validation.clone(),
            recommendations: recommendations.clone(),
            roi: RoiProjector::project(recommendations),
        })
    }

    /// Builds the report from the payloads recorded in a workflow state.
    ///
    /// # Errors
    ///
    /// - `IncompleteAssessment` if the state is not at Results or a
    ///   required payload is missing
    pub fn assemble_from(state: &WorkflowState) -> Result<AssessmentReport, ReportError> {
        let stage = state.current_stage();
        let missing = |what: &str| ReportError::incomplete(stage, format!("no {} recorded", what));

        let profile = state.profile().ok_or_else(|| missing("profile"))?;
        let validation = state.validation().ok_or_else(|| missing("validation report"))?;
        let recommendations = state
            .recommendations()
            .ok_or_else(|| missing("recommendations"))?;

        Self::assemble(stage, profile, validation, recommendations)
    }
}
