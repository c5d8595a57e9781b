//! WorkflowState - per-session position in the stage chain and the data
//! collected so far.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AssessmentProfile, Program, Stage, STAGE_COUNT};
use crate::domain::inventory::Inventory;
use crate::domain::recommendation::RecommendationSet;
use crate::domain::validation::ValidationReport;

/// Data recorded when a stage is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum StagePayload {
    Profile(AssessmentProfile),
    Inventory(Inventory),
    Validation(ValidationReport),
    Recommendations(RecommendationSet),
}

impl StagePayload {
    /// The stage this payload completes.
    pub fn stage(&self) -> Stage {
        match self {
            StagePayload::Profile(_) => Stage::Setup,
            StagePayload::Inventory(_) => Stage::DataAcquisition,
            StagePayload::Validation(_) => Stage::Validation,
            StagePayload::Recommendations(_) => Stage::Computation,
        }
    }
}

/// Workflow position for one assessment.
///
/// # Invariants
///
/// - `stage_index` only passes stage *k* when the payload for *k* is present
/// - recording a payload for stage *k* drops payloads of all later stages
/// - an out-of-range `stage_index` reads as a fresh state at stage 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    program: Program,
    stage_index: usize,
    completed_stage_data: BTreeMap<Stage, StagePayload>,
}

impl WorkflowState {
    /// Creates a fresh state at the first stage.
    pub fn new(program: Program) -> Self {
        Self {
            program,
            stage_index: 0,
            completed_stage_data: BTreeMap::new(),
        }
    }

    /// Rebuilds a state from stored parts without checking them.
    ///
    /// Corrupt indices are tolerated here and corrected by `normalized`.
    pub fn rehydrate(
        program: Program,
        stage_index: usize,
        completed_stage_data: BTreeMap<Stage, StagePayload>,
    ) -> Self {
        Self {
            program,
            stage_index,
            completed_stage_data,
        }
    }

    /// Returns the state with an out-of-range index reset to 0 and its
    /// stage data discarded. In-range states are returned as-is.
    pub fn normalized(self) -> Self {
        if self.is_in_range() {
            self
        } else {
            Self::new(self.program)
        }
    }

    fn is_in_range(&self) -> bool {
        self.stage_index < STAGE_COUNT
    }

    pub fn program(&self) -> Program {
        self.program
    }

    /// Raw stored index, possibly out of range before normalization.
    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    /// Current stage; an out-of-range index reads as `Setup`.
    pub fn current_stage(&self) -> Stage {
        Stage::from_index(self.stage_index).unwrap_or(Stage::Setup)
    }

    /// Operator-facing label of the current stage for this program.
    pub fn current_label(&self) -> &'static str {
        self.program.stage_label(self.current_stage())
    }

    /// Payload recorded for a stage, if any.
    pub fn payload(&self, stage: Stage) -> Option<&StagePayload> {
        if !self.is_in_range() {
            return None;
        }
        self.completed_stage_data.get(&stage)
    }

    /// Stages that currently have a recorded payload, in order.
    pub fn completed_stages(&self) -> Vec<Stage> {
        if !self.is_in_range() {
            return Vec::new();
        }
        self.completed_stage_data.keys().copied().collect()
    }

    pub fn profile(&self) -> Option<&AssessmentProfile> {
        match self.payload(Stage::Setup) {
            Some(StagePayload::Profile(profile)) => Some(profile),
            _ => None,
        }
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        match self.payload(Stage::DataAcquisition) {
            Some(StagePayload::Inventory(inventory)) => Some(inventory),
            _ => None,
        }
    }

    pub fn validation(&self) -> Option<&ValidationReport> {
        match self.payload(Stage::Validation) {
            Some(StagePayload::Validation(report)) => Some(report),
            _ => None,
        }
    }

    pub fn recommendations(&self) -> Option<&RecommendationSet> {
        match self.payload(Stage::Computation) {
            Some(StagePayload::Recommendations(set)) => Some(set),
            _ => None,
        }
    }

    /// Records a payload for its stage and drops every later stage's payload.
    pub(crate) fn record(&mut self, payload: StagePayload) {
        let stage = payload.stage();
        self.completed_stage_data.retain(|s, _| !stage.is_before(s));
        self.completed_stage_data.insert(stage, payload);
    }

    pub(crate) fn set_stage(&mut self, stage: Stage) {
        self.stage_index = stage.index();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::ServerRecord;

    fn inventory() -> Inventory {
        Inventory::with_full_schema(vec![ServerRecord::new("a", "Linux")]).unwrap()
    }

    #[test]
    fn new_state_starts_at_setup_with_no_data() {
        let state = WorkflowState::new(Program::Ola);
        assert_eq!(state.current_stage(), Stage::Setup);
        assert_eq!(state.current_label(), "Environment Setup");
        assert!(state.completed_stages().is_empty());
    }

    #[test]
    fn out_of_range_index_normalizes_to_fresh_state() {
        let mut data = BTreeMap::new();
        data.insert(
            Stage::Setup,
            StagePayload::Profile(AssessmentProfile::new(Program::Map, "Acme")),
        );
        let state = WorkflowState::rehydrate(Program::Map, 7, data);

        assert_eq!(state.current_stage(), Stage::Setup);
        assert!(state.profile().is_none());

        let fixed = state.normalized();
        assert_eq!(fixed.stage_index(), 0);
        assert!(fixed.completed_stages().is_empty());
    }

    #[test]
    fn recording_earlier_stage_discards_later_payloads() {
        let mut state = WorkflowState::new(Program::Map);
        state.record(StagePayload::Profile(AssessmentProfile::new(Program::Map, "Acme")));
        state.record(StagePayload::Inventory(inventory()));
        state.record(StagePayload::Recommendations(RecommendationSet::empty()));

        state.record(StagePayload::Inventory(inventory()));

        assert_eq!(
            state.completed_stages(),
            vec![Stage::Setup, Stage::DataAcquisition]
        );
        assert!(state.recommendations().is_none());
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = WorkflowState::new(Program::OneOla);
        state.record(StagePayload::Profile(
            AssessmentProfile::new(Program::OneOla, "Acme").with_region("eu-west-1"),
        ));

        let json = serde_json::to_string(&state).unwrap();
        let back: WorkflowState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
