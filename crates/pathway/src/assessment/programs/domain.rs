use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assessment::domain::{ParseLabelError, Province};
use crate::assessment::grid::domain::whole_years;

/// Five-tier education scale used by the regional grids.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProgramEducation {
    #[default]
    HighSchool,
    Diploma,
    Bachelors,
    Masters,
    Doctorate,
}

impl FromStr for ProgramEducation {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace(['-', ' ', '\''], "_");
        match normalized.as_str() {
            "high_school" | "secondary" => Ok(Self::HighSchool),
            "diploma" | "college" | "certificate" | "trade" => Ok(Self::Diploma),
            "bachelors" | "bachelor" | "bachelor_s" | "degree" => Ok(Self::Bachelors),
            "masters" | "master" | "master_s" => Ok(Self::Masters),
            "doctorate" | "phd" => Ok(Self::Doctorate),
            _ => Err(ParseLabelError {
                kind: "education",
                value: value.to_string(),
            }),
        }
    }
}

/// Occupation sector, matched against regional in-demand lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Healthcare,
    SkilledTrades,
    Technology,
    Agriculture,
    Transportation,
    Education,
    Business,
    Hospitality,
    #[default]
    Other,
}

impl FromStr for Sector {
    type Err = std::convert::Infallible;

    /// Unrecognized labels fall into [`Sector::Other`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let sector = match normalized.as_str() {
            "healthcare" | "health" | "nursing" => Sector::Healthcare,
            "trades" | "skilled_trades" | "construction" => Sector::SkilledTrades,
            "technology" | "tech" | "it" => Sector::Technology,
            "agriculture" | "farming" => Sector::Agriculture,
            "transportation" | "trucking" | "logistics" => Sector::Transportation,
            "education" | "teaching" => Sector::Education,
            "business" | "finance" => Sector::Business,
            "hospitality" | "food_service" | "tourism" => Sector::Hospitality,
            _ => Sector::Other,
        };
        Ok(sector)
    }
}

/// Flat applicant shape shared by every program grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramProfile {
    pub age: u32,
    pub education: ProgramEducation,
    /// Representative English benchmark.
    pub english: u8,
    /// Representative French benchmark; zero when untested.
    #[serde(default)]
    pub french: u8,
    #[serde(default)]
    pub canadian_work_years: f64,
    #[serde(default)]
    pub foreign_work_years: f64,
    #[serde(default)]
    pub sector: Sector,
    #[serde(default)]
    pub job_offer_province: Option<Province>,
    #[serde(default)]
    pub family_regions: Vec<Province>,
    #[serde(default)]
    pub friend_regions: Vec<Province>,
}

impl ProgramProfile {
    pub fn canadian_years(&self) -> u32 {
        whole_years(self.canadian_work_years)
    }

    pub fn foreign_years(&self) -> u32 {
        whole_years(self.foreign_work_years)
    }

    pub fn total_work_years(&self) -> u32 {
        whole_years(self.canadian_work_years.max(0.0) + self.foreign_work_years.max(0.0))
    }

    pub fn has_family_in(&self, province: Province) -> bool {
        self.family_regions.contains(&province)
    }

    pub fn has_friend_in(&self, province: Province) -> bool {
        self.friend_regions.contains(&province)
    }

    pub fn has_job_offer_in(&self, province: Province) -> bool {
        self.job_offer_province == Some(province)
    }
}

/// Programs the evaluator runs, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramId {
    FederalSkilledWorker,
    ExpressEntryEstimate,
    SaskatchewanSkilledWorker,
    ManitobaSkilledWorkerOverseas,
    BritishColumbiaSkillsImmigration,
    OntarioFrenchSpeakingSkilledWorker,
}

impl ProgramId {
    pub const fn name(self) -> &'static str {
        match self {
            ProgramId::FederalSkilledWorker => "Federal Skilled Worker",
            ProgramId::ExpressEntryEstimate => "Express Entry (CRS estimate)",
            ProgramId::SaskatchewanSkilledWorker => "SINP International Skilled Worker",
            ProgramId::ManitobaSkilledWorkerOverseas => "MPNP Skilled Worker Overseas",
            ProgramId::BritishColumbiaSkillsImmigration => "BC PNP Skills Immigration",
            ProgramId::OntarioFrenchSpeakingSkilledWorker => "OINP French-Speaking Skilled Worker",
        }
    }

    /// Key the document checklist lookup is indexed by.
    pub const fn checklist_id(self) -> &'static str {
        match self {
            ProgramId::FederalSkilledWorker => "fsw-standard",
            ProgramId::ExpressEntryEstimate => "express-entry-profile",
            ProgramId::SaskatchewanSkilledWorker => "sinp-isw",
            ProgramId::ManitobaSkilledWorkerOverseas => "mpnp-swo",
            ProgramId::BritishColumbiaSkillsImmigration => "bcpnp-skills",
            ProgramId::OntarioFrenchSpeakingSkilledWorker => "oinp-fssw",
        }
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
