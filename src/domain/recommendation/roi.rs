//! ROI projection - phases recommendations by effort and accumulates savings.

use serde::{Deserialize, Serialize};

use super::{Effort, RecommendationSet};
use crate::domain::foundation::Money;

/// Implementation phase. Low-effort work lands first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Phase1,
    Phase2,
    Phase3,
}

impl Phase {
    pub fn all() -> &'static [Phase] {
        &[Phase::Phase1, Phase::Phase2, Phase::Phase3]
    }

    pub fn for_effort(effort: Effort) -> Phase {
        match effort {
            Effort::Low => Phase::Phase1,
            Effort::Medium => Phase::Phase2,
            Effort::High => Phase::Phase3,
        }
    }

    pub fn effort(&self) -> Effort {
        match self {
            Phase::Phase1 => Effort::Low,
            Phase::Phase2 => Effort::Medium,
            Phase::Phase3 => Effort::High,
        }
    }

    /// Time window label.
    pub fn window(&self) -> &'static str {
        match self {
            Phase::Phase1 => "0-1 month",
            Phase::Phase2 => "1-3 months",
            Phase::Phase3 => "3-6 months",
        }
    }
}

/// Savings attributed to one phase, plus the running totals through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProjection {
    pub phase: Phase,
    pub window: String,
    pub recommendation_count: usize,
    pub monthly_savings: Money,
    pub annual_savings: Money,
    pub cumulative_monthly: Money,
    pub cumulative_annual: Money,
}

/// All three phases, always present and in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub phases: Vec<PhaseProjection>,
}

impl RoiProjection {
    /// Monthly savings once every phase is complete.
    pub fn total_monthly(&self) -> Money {
        self.phases
            .last()
            .map(|p| p.cumulative_monthly)
            .unwrap_or(Money::ZERO)
    }

    pub fn total_annual(&self) -> Money {
        self.total_monthly().annualized()
    }
}

/// Projects a recommendation set onto the phased timeline.
pub struct RoiProjector;

impl RoiProjector {
    pub fn project(recommendations: &RecommendationSet) -> RoiProjection {
        let mut cumulative = Money::ZERO;
        let phases = Phase::all()
            .iter()
            .map(|phase| {
                let (count, monthly) = recommendations
                    .with_effort(phase.effort())
                    .fold((0usize, Money::ZERO), |(n, total), r| {
                        (n + 1, total + r.monthly_impact)
                    });
                cumulative += monthly;
                PhaseProjection {
                    phase: *phase,
                    window: phase.window().to_string(),
                    recommendation_count: count,
                    monthly_savings: monthly,
                    annual_savings: monthly.annualized(),
                    cumulative_monthly: cumulative,
                    cumulative_annual: cumulative.annualized(),
                }
            })
            .collect();

        RoiProjection { phases }
    }
}
