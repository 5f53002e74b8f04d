use crate::assessment::domain::Province;
use crate::assessment::programs::{ProgramEducation, ProgramProfile, Sector};

/// Mid-career applicant who clears no program on points alone.
pub(crate) fn profile() -> ProgramProfile {
    ProgramProfile {
        age: 30,
        education: ProgramEducation::Bachelors,
        english: 8,
        french: 0,
        canadian_work_years: 0.0,
        foreign_work_years: 3.0,
        sector: Sector::Technology,
        job_offer_province: None,
        family_regions: Vec::new(),
        friend_regions: Vec::new(),
    }
}

/// Bilingual graduate with Canadian experience, a BC offer, and family in Manitoba.
pub(crate) fn strong_profile() -> ProgramProfile {
    ProgramProfile {
        age: 29,
        education: ProgramEducation::Masters,
        english: 9,
        french: 7,
        canadian_work_years: 1.0,
        foreign_work_years: 3.0,
        sector: Sector::Healthcare,
        job_offer_province: Some(Province::BritishColumbia),
        family_regions: vec![Province::Manitoba],
        friend_regions: Vec::new(),
    }
}
