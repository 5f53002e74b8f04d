use super::domain::{whole_years, CanadianEducation, GridProfile, JobOffer, SpouseProfile};
use super::tables::*;
use crate::assessment::domain::{BenchmarkSet, EducationLevel};

pub(crate) struct CoreFactors {
    pub age: u32,
    pub education: u32,
    pub first_language: u32,
    pub second_language: u32,
    pub canadian_work: u32,
}

impl CoreFactors {
    pub fn subtotal(&self, married: bool) -> u32 {
        let cap = if married {
            CORE_CAP_MARRIED
        } else {
            CORE_CAP_SINGLE
        };
        (self.age + self.education + self.first_language + self.second_language + self.canadian_work)
            .min(cap)
    }
}

#[derive(Default)]
pub(crate) struct SpouseFactors {
    pub education: u32,
    pub language: u32,
    pub canadian_work: u32,
}

impl SpouseFactors {
    pub fn subtotal(&self) -> u32 {
        (self.education + self.language + self.canadian_work).min(SPOUSE_CAP)
    }
}

pub(crate) struct TransferabilityFactors {
    pub education_language: u32,
    pub education_canadian_work: u32,
    pub foreign_work_language: u32,
    pub foreign_canadian_work: u32,
    pub trade_certificate: u32,
}

impl TransferabilityFactors {
    /// Each pair is capped on its own, then the section cap applies once to the sum.
    pub fn subtotal(&self) -> u32 {
        let education = (self.education_language + self.education_canadian_work)
            .min(TRANSFERABILITY_PAIR_CAP);
        let foreign = (self.foreign_work_language + self.foreign_canadian_work)
            .min(TRANSFERABILITY_PAIR_CAP);
        (education + foreign + self.trade_certificate).min(TRANSFERABILITY_CAP)
    }
}

pub(crate) struct AdditionalPoints {
    pub sibling: u32,
    pub french: u32,
    pub canadian_education: u32,
    pub job_offer: u32,
    pub nomination: u32,
}

impl AdditionalPoints {
    pub fn subtotal(&self) -> u32 {
        (self.sibling + self.french + self.canadian_education + self.job_offer + self.nomination)
            .min(ADDITIONAL_CAP)
    }
}

pub(crate) fn age_points(age: u32, married: bool) -> u32 {
    let table = if married { &AGE_MARRIED } else { &AGE_SINGLE };
    age.checked_sub(AGE_TABLE_START)
        .and_then(|index| table.get(index as usize))
        .copied()
        .unwrap_or(0)
}

fn per_skill(table: &[(u32, u32)], set: &BenchmarkSet) -> u32 {
    set.levels()
        .into_iter()
        .map(|level| lookup(table, u32::from(level)))
        .sum()
}

pub(crate) fn core_factors(profile: &GridProfile) -> CoreFactors {
    let married = profile.is_married();

    let education = if married {
        EDUCATION_MARRIED[profile.education.index()]
    } else {
        EDUCATION_SINGLE[profile.education.index()]
    };

    let language_table = if married {
        FIRST_LANGUAGE_MARRIED
    } else {
        FIRST_LANGUAGE_SINGLE
    };

    let second_language = profile
        .second_language
        .as_ref()
        .map(|set| {
            let cap = if married {
                SECOND_LANGUAGE_CAP_MARRIED
            } else {
                SECOND_LANGUAGE_CAP_SINGLE
            };
            per_skill(SECOND_LANGUAGE, set).min(cap)
        })
        .unwrap_or(0);

    let work_table = if married {
        CANADIAN_WORK_MARRIED
    } else {
        CANADIAN_WORK_SINGLE
    };

    CoreFactors {
        age: age_points(profile.age, married),
        education,
        first_language: per_skill(language_table, &profile.first_language),
        second_language,
        canadian_work: lookup(work_table, whole_years(profile.canadian_work_years)),
    }
}

pub(crate) fn spouse_factors(profile: &GridProfile) -> SpouseFactors {
    match (&profile.spouse, profile.is_married()) {
        (Some(spouse), true) => score_spouse(spouse),
        _ => SpouseFactors::default(),
    }
}

fn score_spouse(spouse: &SpouseProfile) -> SpouseFactors {
    SpouseFactors {
        education: SPOUSE_EDUCATION[spouse.education.index()],
        language: per_skill(SPOUSE_LANGUAGE, &spouse.language),
        canadian_work: lookup(SPOUSE_CANADIAN_WORK, whole_years(spouse.canadian_work_years)),
    }
}

/// Row in the transferability matrices for a credential, if it counts at all.
fn credential_row(education: EducationLevel) -> Option<usize> {
    match education {
        EducationLevel::None | EducationLevel::HighSchool => None,
        EducationLevel::OneYear | EducationLevel::TwoYear | EducationLevel::Bachelors => Some(0),
        EducationLevel::TwoOrMore | EducationLevel::Masters | EducationLevel::Doctorate => Some(1),
    }
}

/// Column for the all-four-skills language gate: benchmark 7 or benchmark 9.
fn language_column(set: &BenchmarkSet) -> Option<usize> {
    if set.all_at_least(TRANSFERABILITY_LANGUAGE_UPPER) {
        Some(1)
    } else if set.all_at_least(TRANSFERABILITY_LANGUAGE_GATE) {
        Some(0)
    } else {
        None
    }
}

fn canadian_work_column(years: u32) -> Option<usize> {
    match years {
        0 => None,
        1 => Some(0),
        _ => Some(1),
    }
}

fn foreign_work_row(years: u32) -> Option<usize> {
    match years {
        0 => None,
        y if y < FOREIGN_WORK_UPPER_YEARS => Some(0),
        _ => Some(1),
    }
}

fn matrix(table: &[[u32; 2]; 2], row: Option<usize>, column: Option<usize>) -> u32 {
    match (row, column) {
        (Some(row), Some(column)) => table[row][column],
        _ => 0,
    }
}

pub(crate) fn transferability_factors(profile: &GridProfile) -> TransferabilityFactors {
    let credential = credential_row(profile.education);
    let language = language_column(&profile.first_language);
    let canadian = canadian_work_column(whole_years(profile.canadian_work_years));
    let foreign = foreign_work_row(whole_years(profile.foreign_work_years));

    let trade_certificate = if profile.additional.trade_certificate
        && profile
            .first_language
            .all_at_least(TRANSFERABILITY_LANGUAGE_GATE)
    {
        TRADE_CERTIFICATE
    } else {
        0
    };

    TransferabilityFactors {
        education_language: matrix(&EDUCATION_LANGUAGE, credential, language),
        education_canadian_work: matrix(&EDUCATION_CANADIAN_WORK, credential, canadian),
        foreign_work_language: matrix(&FOREIGN_WORK_LANGUAGE, foreign, language),
        foreign_canadian_work: matrix(&FOREIGN_CANADIAN_WORK, foreign, canadian),
        trade_certificate,
    }
}

pub(crate) fn additional_points(profile: &GridProfile) -> AdditionalPoints {
    let extras = &profile.additional;

    let french = match profile.french() {
        Some(french) if french.all_at_least(FRENCH_GATE) => {
            let bilingual = profile
                .english()
                .map(|english| english.all_at_least(FRENCH_ENGLISH_GATE))
                .unwrap_or(false);
            if bilingual {
                FRENCH_BILINGUAL_BONUS
            } else {
                FRENCH_ONLY_BONUS
            }
        }
        _ => 0,
    };

    let canadian_education = match profile.canadian_education {
        CanadianEducation::None => 0,
        CanadianEducation::OneOrTwoYear => CANADIAN_EDUCATION_SHORT,
        CanadianEducation::ThreeYearPlus => CANADIAN_EDUCATION_LONG,
    };

    let job_offer = match extras.job_offer {
        JobOffer::None => 0,
        JobOffer::SeniorManagement => JOB_OFFER_SENIOR,
        JobOffer::MidSkill => JOB_OFFER_MID,
    };

    AdditionalPoints {
        sibling: if extras.sibling_in_canada {
            SIBLING_BONUS
        } else {
            0
        },
        french,
        canadian_education,
        job_offer,
        nomination: if extras.provincial_nomination {
            NOMINATION_BONUS
        } else {
            0
        },
    }
}
