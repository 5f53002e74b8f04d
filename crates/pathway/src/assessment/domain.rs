use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowest benchmark level any converter reports.
pub const MIN_BENCHMARK: u8 = 4;
/// Highest benchmark level any converter reports.
pub const MAX_BENCHMARK: u8 = 12;

/// Raised when a free-text label does not map onto one of the closed vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} label '{value}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

fn normalize_label(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace(['-', ' ', '\''], "_")
}

/// Points for the highest threshold the key reaches in an ascending
/// `(threshold, points)` table. Keys beyond the last threshold keep the last
/// value; keys under the first score zero.
pub(crate) fn lookup(table: &[(u32, u32)], key: u32) -> u32 {
    table
        .iter()
        .rev()
        .find(|(threshold, _)| key >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Benchmark levels for the four assessed abilities of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BenchmarkSet {
    pub speaking: u8,
    pub reading: u8,
    pub writing: u8,
    pub listening: u8,
}

impl BenchmarkSet {
    pub const fn uniform(level: u8) -> Self {
        Self {
            speaking: level,
            reading: level,
            writing: level,
            listening: level,
        }
    }

    pub const fn levels(&self) -> [u8; 4] {
        [self.speaking, self.reading, self.writing, self.listening]
    }

    /// Weakest ability, which is what every "all four skills" gate checks.
    pub fn lowest(&self) -> u8 {
        self.levels().into_iter().min().unwrap_or(0)
    }

    pub fn all_at_least(&self, level: u8) -> bool {
        self.lowest() >= level
    }
}

/// Official language a benchmark set was measured in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficialLanguage {
    #[default]
    English,
    French,
}

/// Highest completed credential, ordered from least to most advanced.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    None,
    HighSchool,
    OneYear,
    TwoYear,
    Bachelors,
    TwoOrMore,
    Masters,
    Doctorate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 8] = [
        EducationLevel::None,
        EducationLevel::HighSchool,
        EducationLevel::OneYear,
        EducationLevel::TwoYear,
        EducationLevel::Bachelors,
        EducationLevel::TwoOrMore,
        EducationLevel::Masters,
        EducationLevel::Doctorate,
    ];

    /// Position in the ordered tier list, used to index the published tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::None => "none",
            EducationLevel::HighSchool => "high_school",
            EducationLevel::OneYear => "one_year",
            EducationLevel::TwoYear => "two_year",
            EducationLevel::Bachelors => "bachelors",
            EducationLevel::TwoOrMore => "two_or_more",
            EducationLevel::Masters => "masters",
            EducationLevel::Doctorate => "doctorate",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_label(value).as_str() {
            "none" | "less_than_secondary" => Ok(Self::None),
            "high_school" | "secondary" => Ok(Self::HighSchool),
            "one_year" | "one_year_diploma" | "certificate" => Ok(Self::OneYear),
            "two_year" | "two_year_diploma" | "diploma" => Ok(Self::TwoYear),
            "bachelors" | "bachelor" | "bachelor_s" => Ok(Self::Bachelors),
            "two_or_more" | "two_or_more_credentials" => Ok(Self::TwoOrMore),
            "masters" | "master" | "master_s" | "professional" => Ok(Self::Masters),
            "doctorate" | "phd" => Ok(Self::Doctorate),
            _ => Err(ParseLabelError::new("education", value)),
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse likelihood bucket, ordered best-first so a plain sort ranks results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityTier {
    High,
    Medium,
    Low,
    None,
}

impl ProbabilityTier {
    /// Returns the worse of the two tiers; a tier can only move downward through this.
    pub fn downgrade_to(self, other: ProbabilityTier) -> ProbabilityTier {
        self.max(other)
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProbabilityTier::High => "High",
            ProbabilityTier::Medium => "Medium",
            ProbabilityTier::Low => "Low",
            ProbabilityTier::None => "None",
        }
    }
}

/// Provinces and territories that can hold a connection or a job offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Province {
    Alberta,
    BritishColumbia,
    Manitoba,
    NewBrunswick,
    NewfoundlandAndLabrador,
    NovaScotia,
    Ontario,
    PrinceEdwardIsland,
    Quebec,
    Saskatchewan,
    NorthwestTerritories,
    Nunavut,
    Yukon,
}

impl Province {
    pub const fn code(self) -> &'static str {
        match self {
            Province::Alberta => "AB",
            Province::BritishColumbia => "BC",
            Province::Manitoba => "MB",
            Province::NewBrunswick => "NB",
            Province::NewfoundlandAndLabrador => "NL",
            Province::NovaScotia => "NS",
            Province::Ontario => "ON",
            Province::PrinceEdwardIsland => "PE",
            Province::Quebec => "QC",
            Province::Saskatchewan => "SK",
            Province::NorthwestTerritories => "NT",
            Province::Nunavut => "NU",
            Province::Yukon => "YT",
        }
    }
}

impl FromStr for Province {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let province = match normalize_label(value).as_str() {
            "ab" | "alberta" => Province::Alberta,
            "bc" | "british_columbia" => Province::BritishColumbia,
            "mb" | "manitoba" => Province::Manitoba,
            "nb" | "new_brunswick" => Province::NewBrunswick,
            "nl" | "newfoundland" | "newfoundland_and_labrador" => {
                Province::NewfoundlandAndLabrador
            }
            "ns" | "nova_scotia" => Province::NovaScotia,
            "on" | "ontario" => Province::Ontario,
            "pe" | "pei" | "prince_edward_island" => Province::PrinceEdwardIsland,
            "qc" | "quebec" => Province::Quebec,
            "sk" | "saskatchewan" => Province::Saskatchewan,
            "nt" | "northwest_territories" => Province::NorthwestTerritories,
            "nu" | "nunavut" => Province::Nunavut,
            "yt" | "yukon" => Province::Yukon,
            _ => return Err(ParseLabelError::new("region", value)),
        };
        Ok(province)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
