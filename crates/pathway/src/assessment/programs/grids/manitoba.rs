use crate::assessment::domain::{lookup, Province};
use crate::assessment::programs::domain::{ProgramEducation, ProgramId, ProgramProfile};
use crate::assessment::programs::{points_result, EligibilityResult, Gate, ProbabilityBands};

pub(crate) const PASS_MARK: u32 = 60;
const BANDS: ProbabilityBands = ProbabilityBands {
    high: 75,
    medium: 65,
    low: PASS_MARK,
};

const FIRST_LANGUAGE: &[(u32, u32)] = &[(4, 8), (5, 11), (6, 14), (7, 17), (8, 20)];
const SECOND_LANGUAGE: &[(u32, u32)] = &[(5, 5)];
const LANGUAGE_CAP: u32 = 25;
const WORK_EXPERIENCE: &[(u32, u32)] = &[(1, 8), (2, 10), (3, 12), (4, 15)];
const CLOSE_RELATIVE: u32 = 20;
const JOB_OFFER: u32 = 20;
const FRIEND: u32 = 10;

fn education_points(education: ProgramEducation) -> u32 {
    match education {
        ProgramEducation::HighSchool => 0,
        ProgramEducation::Diploma => 17,
        ProgramEducation::Bachelors => 20,
        ProgramEducation::Masters | ProgramEducation::Doctorate => 25,
    }
}

fn age_points(age: u32) -> u32 {
    match age {
        18 => 17,
        19 => 18,
        20 => 19,
        21..=45 => 20,
        46 => 10,
        47 => 8,
        48 => 6,
        49 => 4,
        _ => 0,
    }
}

pub(crate) fn score(profile: &ProgramProfile) -> u32 {
    let language = (lookup(FIRST_LANGUAGE, u32::from(profile.english))
        + lookup(SECOND_LANGUAGE, u32::from(profile.french)))
    .min(LANGUAGE_CAP);

    let adaptability = if profile.has_family_in(Province::Manitoba) {
        CLOSE_RELATIVE
    } else if profile.has_job_offer_in(Province::Manitoba) {
        JOB_OFFER
    } else if profile.has_friend_in(Province::Manitoba) {
        FRIEND
    } else {
        0
    };

    language
        + age_points(profile.age)
        + lookup(WORK_EXPERIENCE, profile.total_work_years())
        + education_points(profile.education)
        + adaptability
}

pub(crate) fn evaluate(profile: &ProgramProfile) -> EligibilityResult {
    let connected = profile.has_family_in(Province::Manitoba)
        || profile.has_friend_in(Province::Manitoba);
    let gate = Gate::require(
        connected,
        "requires a family or friend connection in Manitoba",
    );

    points_result(
        ProgramId::ManitobaSkilledWorkerOverseas,
        score(profile),
        PASS_MARK,
        BANDS,
        gate,
    )
}
