//! Workflow controller errors.

use thiserror::Error;

use super::{Program, Stage};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned when a workflow move is rejected.
///
/// A rejected move never alters the caller's state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The current stage lacks the input needed to leave it.
    #[error("Cannot leave stage '{stage}': missing {field}")]
    PrerequisiteMissing { stage: Stage, field: String },

    /// Evidence was supplied for a stage other than the current one.
    #[error("Evidence for stage '{found}' supplied while at stage '{expected}'")]
    EvidenceMismatch { expected: Stage, found: Stage },

    /// A profile was submitted for a different program than the workflow's.
    #[error("Profile is for program {found} but workflow runs {expected}")]
    ProgramMismatch { expected: Program, found: Program },

    #[error("Invalid stage transition: {0}")]
    InvalidTransition(String),
}

impl WorkflowError {
    pub fn prerequisite_missing(stage: Stage, field: impl Into<String>) -> Self {
        WorkflowError::PrerequisiteMissing {
            stage,
            field: field.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkflowError::PrerequisiteMissing { .. } => ErrorCode::PrerequisiteMissing,
            WorkflowError::EvidenceMismatch { .. } | WorkflowError::InvalidTransition(_) => {
                ErrorCode::InvalidStateTransition
            }
            WorkflowError::ProgramMismatch { .. } => ErrorCode::ValidationFailed,
        }
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(err: ValidationError) -> Self {
        WorkflowError::InvalidTransition(err.to_string())
    }
}

impl From<WorkflowError> for DomainError {
    fn from(err: WorkflowError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            WorkflowError::PrerequisiteMissing { stage, field } => domain
                .with_detail("stage", stage.to_string())
                .with_detail("field", field),
            _ => domain,
        }
    }
}
