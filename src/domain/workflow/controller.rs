//! WorkflowController - guarded moves along the stage chain.
//!
//! All operations are pure: they take a state and return a new one.

use super::{Stage, StagePayload, WorkflowError, WorkflowState};
use crate::domain::foundation::StateMachine;

pub struct WorkflowController;

impl WorkflowController {
    /// Moves to the next stage once the current stage's prerequisite holds.
    ///
    /// `evidence` is the payload completing the current stage. When omitted,
    /// a payload already recorded for the stage (for example after a
    /// regress) satisfies the guard. Recording evidence discards the data
    /// of later stages. At the final stage the state is returned unchanged.
    ///
    /// # Errors
    ///
    /// - `EvidenceMismatch` if the evidence belongs to another stage
    /// - `ProgramMismatch` if a profile names another program
    /// - `PrerequisiteMissing` naming the unmet field otherwise
    pub fn advance(
        state: &WorkflowState,
        evidence: Option<StagePayload>,
    ) -> Result<WorkflowState, WorkflowError> {
        let mut next = state.clone().normalized();
        let current = next.current_stage();

        if let Some(payload) = evidence {
            if payload.stage() != current {
                return Err(WorkflowError::EvidenceMismatch {
                    expected: current,
                    found: payload.stage(),
                });
            }
            next.record(payload);
        }

        let Some(target) = current.next() else {
            return Ok(next);
        };

        Self::check_prerequisite(&next, current)?;

        let target = current.transition_to(target)?;
        next.set_stage(target);
        Ok(next)
    }

    /// Moves back one stage, stopping at the first. Never checks
    /// prerequisites and keeps recorded data.
    pub fn regress(state: &WorkflowState) -> WorkflowState {
        let mut prev = state.clone().normalized();
        if let Some(target) = prev.current_stage().previous() {
            prev.set_stage(target);
        }
        prev
    }

    /// Returns a fresh state for the same program.
    pub fn reset(state: &WorkflowState) -> WorkflowState {
        WorkflowState::new(state.program())
    }

    fn check_prerequisite(state: &WorkflowState, stage: Stage) -> Result<(), WorkflowError> {
        let missing = |field: &str| WorkflowError::prerequisite_missing(stage, field);

        match stage {
            Stage::Setup => {
                let profile = state.profile().ok_or_else(|| missing("profile"))?;
                if profile.program != state.program() {
                    return Err(WorkflowError::ProgramMismatch {
                        expected: state.program(),
                        found: profile.program,
                    });
                }
                match profile.first_missing_field() {
                    Some(field) => Err(missing(field.name())),
                    None => Ok(()),
                }
            }
            Stage::DataAcquisition => {
                let inventory = state.inventory().ok_or_else(|| missing("inventory"))?;
                if inventory.is_empty() {
                    return Err(missing("inventory records"));
                }
                Ok(())
            }
            Stage::Validation => state
                .validation()
                .map(|_| ())
                .ok_or_else(|| missing("validation report")),
            Stage::Computation => state
                .recommendations()
                .map(|_| ())
                .ok_or_else(|| missing("recommendations")),
            Stage::Results => Ok(()),
        }
    }
}
