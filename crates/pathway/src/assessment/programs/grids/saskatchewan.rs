use crate::assessment::domain::{lookup, Province};
use crate::assessment::programs::domain::{ProgramEducation, ProgramId, ProgramProfile, Sector};
use crate::assessment::programs::{points_result, EligibilityResult, Gate, ProbabilityBands};

pub(crate) const PASS_MARK: u32 = 60;
const BANDS: ProbabilityBands = ProbabilityBands {
    high: 85,
    medium: 72,
    low: PASS_MARK,
};

const MIN_LANGUAGE: u8 = 4;
const IN_DEMAND_SECTORS: &[Sector] = &[
    Sector::Healthcare,
    Sector::SkilledTrades,
    Sector::Agriculture,
    Sector::Transportation,
    Sector::Technology,
];

const LANGUAGE: &[(u32, u32)] = &[(4, 12), (5, 14), (6, 16), (7, 18), (8, 20)];
const WORK_EXPERIENCE: &[(u32, u32)] = &[(1, 2), (2, 4), (3, 6), (4, 8), (5, 10)];
const JOB_OFFER_CONNECTION: u32 = 30;
const RELATIVE_CONNECTION: u32 = 20;

fn education_points(education: ProgramEducation) -> u32 {
    match education {
        ProgramEducation::HighSchool => 0,
        ProgramEducation::Diploma => 15,
        ProgramEducation::Bachelors => 20,
        ProgramEducation::Masters | ProgramEducation::Doctorate => 23,
    }
}

fn age_points(age: u32) -> u32 {
    match age {
        18..=21 => 8,
        22..=34 => 12,
        35..=45 => 10,
        46..=50 => 8,
        _ => 0,
    }
}

fn best_language(profile: &ProgramProfile) -> u8 {
    profile.english.max(profile.french)
}

pub(crate) fn score(profile: &ProgramProfile) -> u32 {
    let connection = if profile.has_job_offer_in(Province::Saskatchewan) {
        JOB_OFFER_CONNECTION
    } else if profile.has_family_in(Province::Saskatchewan) {
        RELATIVE_CONNECTION
    } else {
        0
    };

    education_points(profile.education)
        + lookup(WORK_EXPERIENCE, profile.total_work_years())
        + lookup(LANGUAGE, u32::from(best_language(profile)))
        + age_points(profile.age)
        + connection
}

pub(crate) fn evaluate(profile: &ProgramProfile) -> EligibilityResult {
    let gate = Gate::require(
        best_language(profile) >= MIN_LANGUAGE,
        format!("requires a language benchmark of {MIN_LANGUAGE} or higher"),
    )
    .and(Gate::require(
        IN_DEMAND_SECTORS.contains(&profile.sector)
            || profile.has_job_offer_in(Province::Saskatchewan),
        "requires an in-demand occupation or a Saskatchewan job offer",
    ));

    points_result(
        ProgramId::SaskatchewanSkilledWorker,
        score(profile),
        PASS_MARK,
        BANDS,
        gate,
    )
}
