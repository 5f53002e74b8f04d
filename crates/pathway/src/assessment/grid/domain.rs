use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assessment::domain::{BenchmarkSet, EducationLevel, OfficialLanguage, ParseLabelError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
}

/// Length of the longest credential earned inside Canada.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanadianEducation {
    #[default]
    None,
    OneOrTwoYear,
    ThreeYearPlus,
}

/// Arranged employment tier, keyed by the occupation classification of the offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobOffer {
    #[default]
    None,
    SeniorManagement,
    MidSkill,
}

impl FromStr for JobOffer {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "none" | "" => Ok(Self::None),
            "senior_management" | "teer_00" | "noc_00" => Ok(Self::SeniorManagement),
            "mid_skill" | "skilled" | "teer_0_3" => Ok(Self::MidSkill),
            _ => Err(ParseLabelError {
                kind: "job offer",
                value: value.to_string(),
            }),
        }
    }
}

/// Applicant profile scored by the comprehensive ranking grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridProfile {
    pub marital_status: MaritalStatus,
    pub age: u32,
    pub education: EducationLevel,
    #[serde(default)]
    pub canadian_education: CanadianEducation,
    pub first_language: BenchmarkSet,
    /// Which official language `first_language` measures; the second set is the other one.
    #[serde(default)]
    pub first_language_kind: OfficialLanguage,
    #[serde(default)]
    pub second_language: Option<BenchmarkSet>,
    #[serde(default)]
    pub canadian_work_years: f64,
    #[serde(default)]
    pub foreign_work_years: f64,
    #[serde(default)]
    pub spouse: Option<SpouseProfile>,
    #[serde(default)]
    pub additional: AdditionalFactors,
}

impl GridProfile {
    pub fn is_married(&self) -> bool {
        self.marital_status == MaritalStatus::Married
    }

    pub fn english(&self) -> Option<&BenchmarkSet> {
        match self.first_language_kind {
            OfficialLanguage::English => Some(&self.first_language),
            OfficialLanguage::French => self.second_language.as_ref(),
        }
    }

    pub fn french(&self) -> Option<&BenchmarkSet> {
        match self.first_language_kind {
            OfficialLanguage::French => Some(&self.first_language),
            OfficialLanguage::English => self.second_language.as_ref(),
        }
    }
}

/// Accompanying spouse or common-law partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpouseProfile {
    pub education: EducationLevel,
    pub language: BenchmarkSet,
    #[serde(default)]
    pub canadian_work_years: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalFactors {
    #[serde(default)]
    pub sibling_in_canada: bool,
    #[serde(default)]
    pub job_offer: JobOffer,
    #[serde(default)]
    pub provincial_nomination: bool,
    #[serde(default)]
    pub trade_certificate: bool,
}

/// Whole years of experience; negative or non-finite input counts as none.
pub(crate) fn whole_years(years: f64) -> u32 {
    if years.is_finite() && years > 0.0 {
        years.floor() as u32
    } else {
        0
    }
}
