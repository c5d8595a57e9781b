//! Report Module - assembling and projecting the final assessment report.

mod assembler;
mod errors;
#[allow(clippy::module_inception)]
mod report;
mod view;

pub use assembler::ReportAssembler;
pub use errors::ReportError;
pub use report::{AssessmentReport, ExecutiveSummary};
pub use view::{
    CostModelProjection, ExecutiveProjection, ReportProjection, ReportView, TechnicalProjection,
    EXECUTIVE_TOP_N,
};
