//! Multi-program eligibility evaluator.
//!
//! Runs a flat [`ProgramProfile`] through every supported program grid
//! independently and ranks the results by probability tier. Within a tier the
//! evaluation order is kept (stable sort); scores are not compared.

pub mod domain;
mod estimate;
mod grids;

#[cfg(test)]
mod tests;

pub use domain::{ProgramEducation, ProgramId, ProgramProfile, Sector};
pub use estimate::estimate_crs;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::domain::ProbabilityTier;

/// Outcome for one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub program: ProgramId,
    pub program_name: String,
    pub eligible: bool,
    pub score: Option<u32>,
    pub threshold: Option<u32>,
    pub reason: String,
    pub probability: ProbabilityTier,
    pub checklist_id: Option<String>,
}

/// Absolute score boundaries for each probability tier, set from recent cut-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProbabilityBands {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl ProbabilityBands {
    pub fn tier(&self, score: u32) -> ProbabilityTier {
        if score >= self.high {
            ProbabilityTier::High
        } else if score >= self.medium {
            ProbabilityTier::Medium
        } else if score >= self.low {
            ProbabilityTier::Low
        } else {
            ProbabilityTier::None
        }
    }
}

/// Non-numeric requirement a program enforces on top of its threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Gate {
    Open,
    Closed(String),
}

impl Gate {
    pub fn require(condition: bool, failure: impl Into<String>) -> Self {
        if condition {
            Gate::Open
        } else {
            Gate::Closed(failure.into())
        }
    }

    /// First closed gate wins.
    pub fn and(self, other: Gate) -> Gate {
        match self {
            Gate::Open => other,
            closed => closed,
        }
    }
}

fn checklist_for(program: ProgramId, probability: ProbabilityTier) -> Option<String> {
    (probability != ProbabilityTier::None).then(|| program.checklist_id().to_string())
}

/// Builds the result for a points-based program.
pub(crate) fn points_result(
    program: ProgramId,
    score: u32,
    threshold: u32,
    bands: ProbabilityBands,
    gate: Gate,
) -> EligibilityResult {
    let passes = score >= threshold;

    let (eligible, probability, reason) = match gate {
        Gate::Closed(failure) => (false, ProbabilityTier::None, failure),
        Gate::Open if passes => (
            true,
            bands.tier(score),
            format!("score {score} meets threshold {threshold}"),
        ),
        Gate::Open => (
            false,
            bands.tier(score),
            format!(
                "score {score} is {} below threshold {threshold}",
                threshold - score
            ),
        ),
    };

    EligibilityResult {
        program,
        program_name: program.name().to_string(),
        eligible,
        score: Some(score),
        threshold: Some(threshold),
        reason,
        probability,
        checklist_id: checklist_for(program, probability),
    }
}

/// Builds the result for a program that has requirements but no points grid.
pub(crate) fn requirements_result(
    program: ProgramId,
    gate: Gate,
    probability_when_open: ProbabilityTier,
) -> EligibilityResult {
    let (eligible, probability, reason) = match gate {
        Gate::Open => (
            true,
            probability_when_open,
            "meets all program requirements".to_string(),
        ),
        Gate::Closed(failure) => (false, ProbabilityTier::None, failure),
    };

    EligibilityResult {
        program,
        program_name: program.name().to_string(),
        eligible,
        score: None,
        threshold: None,
        reason,
        probability,
        checklist_id: checklist_for(program, probability),
    }
}

type ProgramEvaluator = fn(&ProgramProfile) -> EligibilityResult;

const PROGRAMS: [ProgramEvaluator; 6] = [
    grids::federal::evaluate,
    estimate::evaluate,
    grids::saskatchewan::evaluate,
    grids::manitoba::evaluate,
    grids::british_columbia::evaluate,
    grids::ontario::evaluate,
];

/// Evaluates every program and orders the results High → Medium → Low → None.
pub fn evaluate_eligibility(profile: &ProgramProfile) -> Vec<EligibilityResult> {
    let mut results: Vec<EligibilityResult> =
        PROGRAMS.iter().map(|evaluate| evaluate(profile)).collect();

    results.sort_by_key(|result| result.probability);

    debug!(
        age = profile.age,
        english = profile.english,
        french = profile.french,
        eligible = results.iter().filter(|result| result.eligible).count(),
        "evaluated program eligibility"
    );

    results
}
