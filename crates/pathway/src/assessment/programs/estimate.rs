//! Cheap ranking-system estimate for the flat profile.
//!
//! This is a reduced banding of the comprehensive grid and is kept separate
//! from [`crate::assessment::grid`]: the two may disagree for the same person.

use super::domain::{ProgramEducation, ProgramId, ProgramProfile};
use super::{points_result, EligibilityResult, Gate, ProbabilityBands};
use crate::assessment::domain::lookup;

/// Cut-off of recent general rounds of invitations.
pub(crate) const RECENT_DRAW_CUTOFF: u32 = 491;
const BANDS: ProbabilityBands = ProbabilityBands {
    high: 520,
    medium: RECENT_DRAW_CUTOFF,
    low: 450,
};

// Representative English benchmark across all four abilities.
const ENGLISH_BRACKETS: &[(u32, u32)] = &[(4, 24), (6, 36), (7, 68), (8, 92), (9, 124), (10, 136)];
const FRENCH_GATE: u8 = 7;
const FRENCH_ENGLISH_GATE: u8 = 5;
const FRENCH_ONLY_BONUS: u32 = 25;
const FRENCH_BILINGUAL_BONUS: u32 = 50;
const CANADIAN_EXPERIENCE_BONUS: u32 = 40;
const FOREIGN_EXPERIENCE: &[(u32, u32)] = &[(1, 13), (3, 25)];

fn age_points(age: u32) -> u32 {
    match age {
        20..=29 => 110,
        18..=19 | 30..=31 => 100,
        32..=35 => 85,
        36..=39 => 65,
        40..=44 => 30,
        _ => 0,
    }
}

fn education_points(education: ProgramEducation) -> u32 {
    match education {
        ProgramEducation::HighSchool => 30,
        ProgramEducation::Diploma => 98,
        ProgramEducation::Bachelors => 120,
        ProgramEducation::Masters => 135,
        ProgramEducation::Doctorate => 150,
    }
}

fn french_bonus(profile: &ProgramProfile) -> u32 {
    match (profile.french >= FRENCH_GATE, profile.english >= FRENCH_ENGLISH_GATE) {
        (true, true) => FRENCH_BILINGUAL_BONUS,
        (true, false) => FRENCH_ONLY_BONUS,
        _ => 0,
    }
}

/// Approximate ranking score from age, education, language, and experience brackets.
pub fn estimate_crs(profile: &ProgramProfile) -> u32 {
    let canadian = if profile.canadian_years() >= 1 {
        CANADIAN_EXPERIENCE_BONUS
    } else {
        0
    };

    age_points(profile.age)
        + education_points(profile.education)
        + lookup(ENGLISH_BRACKETS, u32::from(profile.english))
        + french_bonus(profile)
        + canadian
        + lookup(FOREIGN_EXPERIENCE, profile.foreign_years())
}

pub(crate) fn evaluate(profile: &ProgramProfile) -> EligibilityResult {
    points_result(
        ProgramId::ExpressEntryEstimate,
        estimate_crs(profile),
        RECENT_DRAW_CUTOFF,
        BANDS,
        Gate::Open,
    )
}
