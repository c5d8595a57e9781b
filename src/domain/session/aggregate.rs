//! AssessmentSession - one operator's assessment in progress.
//!
//! Each session carries its own workflow state and is persisted through the
//! `SessionRepository` port.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::report::{AssessmentReport, ReportAssembler, ReportError};
use crate::domain::workflow::{
    Program, Stage, StagePayload, WorkflowController, WorkflowError, WorkflowState,
};

/// Session aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `state` only changes through the workflow controller
/// - `updated_at` is never before `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    id: SessionId,
    state: WorkflowState,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    /// Starts a new session at the first stage of a program.
    pub fn new(id: SessionId, program: Program) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: WorkflowState::new(program),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a session from persistence (no validation).
    ///
    /// A corrupt stage index is corrected on the next workflow operation.
    pub fn reconstitute(
        id: SessionId,
        state: WorkflowState,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            state,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn program(&self) -> Program {
        self.state.program()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn current_stage(&self) -> Stage {
        self.state.current_stage()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Advances the workflow. On error the session is left untouched.
    pub fn advance(&mut self, evidence: Option<StagePayload>) -> Result<Stage, WorkflowError> {
        let next = WorkflowController::advance(&self.state, evidence)?;
        self.replace_state(next);
        Ok(self.current_stage())
    }

    pub fn regress(&mut self) -> Stage {
        let prev = WorkflowController::regress(&self.state);
        self.replace_state(prev);
        self.current_stage()
    }

    pub fn reset(&mut self) {
        let fresh = WorkflowController::reset(&self.state);
        self.replace_state(fresh);
    }

    /// Assembles the report from the session's recorded stage data.
    pub fn report(&self) -> Result<AssessmentReport, ReportError> {
        ReportAssembler::assemble_from(&self.state)
    }

    fn replace_state(&mut self, state: WorkflowState) {
        self.state = state;
        self.updated_at = Timestamp::now();
    }
}
