//! Assessment command and query handlers.
//!
//! One handler per workflow step. Mutating handlers hold the session's lock
//! from load to persist.

mod end_assessment;
mod errors;
mod get_report;
mod navigate_stage;
mod run_analysis;
mod start_assessment;
mod submit_profile;
mod support;
mod upload_inventory;
mod validate_inventory;

pub use end_assessment::{EndAssessmentCommand, EndAssessmentHandler};
pub use errors::AssessmentError;
pub use get_report::{GetReportHandler, GetReportQuery};
pub use navigate_stage::{NavigateStageCommand, NavigateStageHandler, Navigation, NavigationResult};
pub use run_analysis::{RunAnalysisCommand, RunAnalysisHandler, RunAnalysisResult};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult};
pub use submit_profile::{SubmitProfileCommand, SubmitProfileHandler, SubmitProfileResult};
pub use upload_inventory::{UploadInventoryCommand, UploadInventoryHandler, UploadInventoryResult};
pub use validate_inventory::{
    ValidateInventoryCommand, ValidateInventoryHandler, ValidateInventoryResult,
};
