use crate::assessment::domain::{BenchmarkSet, EducationLevel, OfficialLanguage};
use crate::assessment::grid::{
    AdditionalFactors, CanadianEducation, GridProfile, MaritalStatus, SpouseProfile,
};

pub(super) fn single_profile(age: u32, education: EducationLevel, level: u8) -> GridProfile {
    GridProfile {
        marital_status: MaritalStatus::Single,
        age,
        education,
        canadian_education: CanadianEducation::None,
        first_language: BenchmarkSet::uniform(level),
        first_language_kind: OfficialLanguage::English,
        second_language: None,
        canadian_work_years: 0.0,
        foreign_work_years: 0.0,
        spouse: None,
        additional: AdditionalFactors::default(),
    }
}

pub(super) fn married_profile(age: u32, education: EducationLevel, level: u8) -> GridProfile {
    GridProfile {
        marital_status: MaritalStatus::Married,
        spouse: Some(spouse(EducationLevel::Masters, 9, 2.0)),
        ..single_profile(age, education, level)
    }
}

pub(super) fn spouse(education: EducationLevel, level: u8, canadian_work_years: f64) -> SpouseProfile {
    SpouseProfile {
        education,
        language: BenchmarkSet::uniform(level),
        canadian_work_years,
    }
}

pub(super) fn maxed_profile() -> GridProfile {
    let mut profile = single_profile(25, EducationLevel::Doctorate, 12);
    profile.second_language = Some(BenchmarkSet::uniform(12));
    profile.canadian_work_years = 8.0;
    profile.foreign_work_years = 8.0;
    profile.canadian_education = CanadianEducation::ThreeYearPlus;
    profile.additional = AdditionalFactors {
        sibling_in_canada: true,
        job_offer: crate::assessment::grid::JobOffer::SeniorManagement,
        provincial_nomination: true,
        trade_certificate: true,
    };
    profile
}
