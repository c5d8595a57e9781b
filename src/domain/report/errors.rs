//! Report assembly errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::workflow::Stage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The workflow has not reached Results, or a stage payload is absent.
    #[error("Assessment is incomplete: {reason}")]
    IncompleteAssessment { stage: Stage, reason: String },
}

impl ReportError {
    pub fn incomplete(stage: Stage, reason: impl Into<String>) -> Self {
        ReportError::IncompleteAssessment {
            stage,
            reason: reason.into(),
        }
    }
}

impl From<ReportError> for DomainError {
    fn from(err: ReportError) -> Self {
        let message = err.to_string();
        match err {
            ReportError::IncompleteAssessment { stage, .. } => {
                DomainError::new(ErrorCode::IncompleteAssessment, message)
                    .with_detail("stage", stage.to_string())
            }
        }
    }
}
