//! Stage enum representing the five workflow steps shared by all programs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Number of stages in every program's workflow.
pub const STAGE_COUNT: usize = 5;

/// The five workflow stages in canonical order.
///
/// Programs label these differently (see `Program::stage_label`) but the
/// shape of the chain is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Setup,
    DataAcquisition,
    Validation,
    Computation,
    Results,
}

impl Stage {
    /// Returns all stages in canonical order.
    pub fn all() -> &'static [Stage; STAGE_COUNT] {
        &[
            Stage::Setup,
            Stage::DataAcquisition,
            Stage::Validation,
            Stage::Computation,
            Stage::Results,
        ]
    }

    /// Returns the stage at a 0-based position, if in range.
    pub fn from_index(index: usize) -> Option<Stage> {
        Self::all().get(index).copied()
    }

    /// Returns the 0-based index of this stage.
    pub fn index(&self) -> usize {
        match self {
            Stage::Setup => 0,
            Stage::DataAcquisition => 1,
            Stage::Validation => 2,
            Stage::Computation => 3,
            Stage::Results => 4,
        }
    }

    /// Returns the next stage, if any.
    pub fn next(&self) -> Option<Stage> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous stage, if any.
    pub fn previous(&self) -> Option<Stage> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Returns true if this is the last stage.
    pub fn is_final(&self) -> bool {
        self.next().is_none()
    }

    /// Returns true if this stage comes before another.
    pub fn is_before(&self, other: &Stage) -> bool {
        self.index() < other.index()
    }
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Setup => "setup",
            Stage::DataAcquisition => "data_acquisition",
            Stage::Validation => "validation",
            Stage::Computation => "computation",
            Stage::Results => "results",
        };
        write!(f, "{}", s)
    }
}
