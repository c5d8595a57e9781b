//! Errors shared by the assessment handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::inventory::InventoryError;
use crate::domain::report::ReportError;
use crate::domain::validation::SchemaError;
use crate::domain::workflow::{Stage, WorkflowError};

/// Errors returned by assessment command and query handlers.
///
/// A failed command never persists a partial session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// The command belongs to a different stage than the session is at.
    #[error("Session is at stage '{actual}', command needs '{expected}'")]
    WrongStage { expected: Stage, actual: Stage },

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Storage error: {0}")]
    Storage(DomainError),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::SessionNotFound,
            AssessmentError::WrongStage { .. } => ErrorCode::InvalidStateTransition,
            AssessmentError::Workflow(err) => err.code(),
            AssessmentError::Inventory(err) => err.code(),
            AssessmentError::Schema(_) => ErrorCode::SchemaError,
            AssessmentError::Report(_) => ErrorCode::IncompleteAssessment,
            AssessmentError::Storage(err) => err.code,
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        AssessmentError::Storage(err)
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::NotFound(id) => {
                DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
                    .with_detail("session_id", id.to_string())
            }
            AssessmentError::WrongStage { expected, actual } => DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Session is at stage '{}', command needs '{}'", actual, expected),
            )
            .with_detail("stage", actual.to_string()),
            AssessmentError::Workflow(err) => err.into(),
            AssessmentError::Inventory(err) => err.into(),
            AssessmentError::Schema(err) => err.into(),
            AssessmentError::Report(err) => err.into(),
            AssessmentError::Storage(err) => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::Column;

    #[test]
    fn codes_follow_source_error() {
        let schema = AssessmentError::from(SchemaError {
            missing_columns: vec![Column::Os],
        });
        assert_eq!(schema.code(), ErrorCode::SchemaError);

        let workflow =
            AssessmentError::from(WorkflowError::prerequisite_missing(Stage::Setup, "customer"));
        assert_eq!(workflow.code(), ErrorCode::PrerequisiteMissing);
    }

    #[test]
    fn converts_into_domain_error_with_details() {
        let id = SessionId::new();
        let domain: DomainError = AssessmentError::NotFound(id).into();

        assert_eq!(domain.code, ErrorCode::SessionNotFound);
        assert_eq!(domain.details.get("session_id"), Some(&id.to_string()));
    }
}
