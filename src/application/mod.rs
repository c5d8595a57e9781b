//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler loads a session, runs one workflow operation, persists the
//! result and logs the outcome.

pub mod handlers;
mod session_locks;

pub use handlers::assessment::{
    AssessmentError, EndAssessmentCommand, EndAssessmentHandler, GetReportHandler, GetReportQuery, NavigateStageCommand,
    NavigateStageHandler, Navigation, NavigationResult, RunAnalysisCommand, RunAnalysisHandler,
    RunAnalysisResult, StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult,
    SubmitProfileCommand, SubmitProfileHandler, SubmitProfileResult, UploadInventoryCommand,
    UploadInventoryHandler, UploadInventoryResult, ValidateInventoryCommand,
    ValidateInventoryHandler, ValidateInventoryResult,
};
pub use session_locks::SessionLocks;
