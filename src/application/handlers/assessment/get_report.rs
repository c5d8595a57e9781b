//! GetReportHandler - assembles the report of a finished assessment.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::domain::report::AssessmentReport;
use crate::ports::SessionRepository;

use super::support::load_session;
use super::AssessmentError;

#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub session_id: SessionId,
}

/// Read-only; takes no session lock.
pub struct GetReportHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetReportHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<AssessmentReport, AssessmentError> {
        let session = load_session(self.repository.as_ref(), &query.session_id).await?;
        let report = session.report()?;

        debug!(
            session_id = %query.session_id,
            recommendations = report.summary.recommendation_count,
            monthly_impact = %report.summary.total_monthly_impact,
            "Report assembled"
        );

        Ok(report)
    }
}
