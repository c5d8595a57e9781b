//! Workflow Module - the per-program stage state machine.
//!
//! # Components
//!
//! - `Stage` / `Program` - The shared five-stage chain and program variants
//! - `AssessmentProfile` - Setup answers captured in the first stage
//! - `WorkflowState` / `StagePayload` - Position and recorded stage data
//! - `WorkflowController` - Guarded advance, regress and reset

mod controller;
mod errors;
mod profile;
mod program;
mod stage;
mod state;

pub use controller::WorkflowController;
pub use errors::WorkflowError;
pub use profile::{AssessmentProfile, ProfileField};
pub use program::Program;
pub use stage::{Stage, STAGE_COUNT};
pub use state::{StagePayload, WorkflowState};
