use crate::assessment::domain::{lookup, Province};
use crate::assessment::programs::domain::{ProgramEducation, ProgramId, ProgramProfile};
use crate::assessment::programs::{points_result, EligibilityResult, Gate, ProbabilityBands};

pub(crate) const PASS_MARK: u32 = 67;
const BANDS: ProbabilityBands = ProbabilityBands {
    high: 80,
    medium: 72,
    low: PASS_MARK,
};

const MIN_ENGLISH: u8 = 7;
const MIN_WORK_YEARS: u32 = 1;

// Representative benchmark across all four abilities.
const FIRST_LANGUAGE: &[(u32, u32)] = &[(7, 16), (8, 20), (9, 24)];
const SECOND_LANGUAGE: &[(u32, u32)] = &[(5, 4)];
const WORK_EXPERIENCE: &[(u32, u32)] = &[(1, 9), (2, 11), (4, 13), (6, 15)];
const ARRANGED_EMPLOYMENT: u32 = 10;
const ADAPTABILITY_CANADIAN_WORK: u32 = 10;
const ADAPTABILITY_RELATIVE: u32 = 5;
const ADAPTABILITY_JOB_OFFER: u32 = 5;
const ADAPTABILITY_CAP: u32 = 10;
const AGE_FULL_POINTS: u32 = 12;
const AGE_FULL_UNTIL: u32 = 35;

fn education_points(education: ProgramEducation) -> u32 {
    match education {
        ProgramEducation::HighSchool => 5,
        ProgramEducation::Diploma => 19,
        ProgramEducation::Bachelors => 21,
        ProgramEducation::Masters => 23,
        ProgramEducation::Doctorate => 25,
    }
}

/// Full points from 18 to 35, then one point less per year until 47.
fn age_points(age: u32) -> u32 {
    match age {
        18..=AGE_FULL_UNTIL => AGE_FULL_POINTS,
        _ if age > AGE_FULL_UNTIL => AGE_FULL_POINTS.saturating_sub(age - AGE_FULL_UNTIL),
        _ => 0,
    }
}

fn has_qualifying_offer(profile: &ProgramProfile) -> bool {
    matches!(profile.job_offer_province, Some(province) if province != Province::Quebec)
}

pub(crate) fn score(profile: &ProgramProfile) -> u32 {
    let language = lookup(FIRST_LANGUAGE, u32::from(profile.english))
        + lookup(SECOND_LANGUAGE, u32::from(profile.french));

    let arranged_employment = if has_qualifying_offer(profile) {
        ARRANGED_EMPLOYMENT
    } else {
        0
    };

    let mut adaptability = 0;
    if profile.canadian_years() >= 1 {
        adaptability += ADAPTABILITY_CANADIAN_WORK;
    }
    if !profile.family_regions.is_empty() {
        adaptability += ADAPTABILITY_RELATIVE;
    }
    if has_qualifying_offer(profile) {
        adaptability += ADAPTABILITY_JOB_OFFER;
    }

    language
        + education_points(profile.education)
        + lookup(WORK_EXPERIENCE, profile.total_work_years())
        + age_points(profile.age)
        + arranged_employment
        + adaptability.min(ADAPTABILITY_CAP)
}

pub(crate) fn evaluate(profile: &ProgramProfile) -> EligibilityResult {
    let gate = Gate::require(
        profile.english >= MIN_ENGLISH,
        format!("requires English benchmark {MIN_ENGLISH} or higher"),
    )
    .and(Gate::require(
        profile.total_work_years() >= MIN_WORK_YEARS,
        "requires at least one year of skilled work experience",
    ));

    points_result(
        ProgramId::FederalSkilledWorker,
        score(profile),
        PASS_MARK,
        BANDS,
        gate,
    )
}
