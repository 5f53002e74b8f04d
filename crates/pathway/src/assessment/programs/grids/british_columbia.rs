//! Registration-system style grid.
//!
//! The wage and area-of-employment factors need offer details the flat profile
//! does not carry, so they are scored on conservative placeholders: a mid-range
//! wage and a Metro Vancouver work location (no regional points). Results are
//! flagged in the reason text and may understate official scores.

use crate::assessment::domain::{lookup, Province};
use crate::assessment::programs::domain::{ProgramEducation, ProgramId, ProgramProfile};
use crate::assessment::programs::{points_result, EligibilityResult, Gate, ProbabilityBands};

pub(crate) const RECENT_CUTOFF: u32 = 90;
const BANDS: ProbabilityBands = ProbabilityBands {
    high: 105,
    medium: 95,
    low: RECENT_CUTOFF,
};

pub(crate) const ASSUMED_WAGE_POINTS: u32 = 20;
pub(crate) const ASSUMED_AREA_POINTS: u32 = 0;

const WORK_EXPERIENCE: &[(u32, u32)] = &[(1, 4), (2, 8), (3, 12), (4, 16), (5, 20)];
const CANADIAN_EXPERIENCE_BONUS: u32 = 10;
const ENGLISH: &[(u32, u32)] = &[(5, 5), (6, 10), (7, 15), (8, 20), (9, 25), (10, 30)];
const BILINGUAL_MINIMUM: u8 = 4;
const BILINGUAL_BONUS: u32 = 10;
const LANGUAGE_CAP: u32 = 40;

const PLACEHOLDER_NOTE: &str = "wage and area scored on conservative placeholders";

fn education_points(education: ProgramEducation) -> u32 {
    match education {
        ProgramEducation::HighSchool => 0,
        ProgramEducation::Diploma => 5,
        ProgramEducation::Bachelors => 15,
        ProgramEducation::Masters => 22,
        ProgramEducation::Doctorate => 27,
    }
}

pub(crate) fn score(profile: &ProgramProfile) -> u32 {
    let economic = if profile.has_job_offer_in(Province::BritishColumbia) {
        ASSUMED_WAGE_POINTS + ASSUMED_AREA_POINTS
    } else {
        0
    };

    let canadian_bonus = if profile.canadian_years() >= 1 {
        CANADIAN_EXPERIENCE_BONUS
    } else {
        0
    };

    let bilingual = if profile.english >= BILINGUAL_MINIMUM && profile.french >= BILINGUAL_MINIMUM
    {
        BILINGUAL_BONUS
    } else {
        0
    };
    let language = (lookup(ENGLISH, u32::from(profile.english)) + bilingual).min(LANGUAGE_CAP);

    economic
        + lookup(WORK_EXPERIENCE, profile.total_work_years())
        + canadian_bonus
        + education_points(profile.education)
        + language
}

pub(crate) fn evaluate(profile: &ProgramProfile) -> EligibilityResult {
    let has_offer = profile.has_job_offer_in(Province::BritishColumbia);
    let gate = Gate::require(
        has_offer,
        "requires a job offer from a British Columbia employer",
    );

    let mut result = points_result(
        ProgramId::BritishColumbiaSkillsImmigration,
        score(profile),
        RECENT_CUTOFF,
        BANDS,
        gate,
    );
    if has_offer {
        result.reason = format!("{} ({PLACEHOLDER_NOTE})", result.reason);
    }
    result
}
