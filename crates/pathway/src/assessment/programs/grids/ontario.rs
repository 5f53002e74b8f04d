use crate::assessment::domain::ProbabilityTier;
use crate::assessment::programs::domain::{ProgramId, ProgramProfile};
use crate::assessment::programs::{requirements_result, EligibilityResult, Gate};

const MIN_FRENCH: u8 = 7;
const MIN_ENGLISH: u8 = 6;
const MIN_WORK_YEARS: u32 = 1;

/// Not points-based: provincial selection draws from the federal pool, so an
/// applicant meeting every requirement is rated no better than Medium.
pub(crate) fn evaluate(profile: &ProgramProfile) -> EligibilityResult {
    let gate = Gate::require(
        profile.french >= MIN_FRENCH,
        format!("requires French benchmark {MIN_FRENCH} or higher"),
    )
    .and(Gate::require(
        profile.english >= MIN_ENGLISH,
        format!("requires English benchmark {MIN_ENGLISH} or higher"),
    ))
    .and(Gate::require(
        profile.total_work_years() >= MIN_WORK_YEARS,
        "requires at least one year of skilled work experience",
    ));

    requirements_result(
        ProgramId::OntarioFrenchSpeakingSkilledWorker,
        gate,
        ProbabilityTier::Medium,
    )
}
