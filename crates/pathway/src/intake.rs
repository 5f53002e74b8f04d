//! Boundary parsing of loose CSV rows into strict program profiles.

use std::io::Read;

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use crate::assessment::domain::Province;
use crate::assessment::programs::domain::{ProgramEducation, ProgramProfile, Sector};

/// Rows are numbered from 1, not counting the header.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to read profile rows: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown education '{value}'")]
    UnknownEducation { row: usize, value: String },
    #[error("row {row}: unknown region '{value}'")]
    UnknownRegion { row: usize, value: String },
}

pub fn parse_program_profiles<R: Read>(reader: R) -> Result<Vec<ProgramProfile>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut profiles = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProfileRow>().enumerate() {
        let row = record?;
        profiles.push(row.into_profile(index + 1)?);
    }

    debug!(rows = profiles.len(), "parsed program profiles");
    Ok(profiles)
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    age: u32,
    education: String,
    english: u8,
    #[serde(default)]
    french: Option<u8>,
    #[serde(default)]
    canadian_work_years: Option<f64>,
    #[serde(default)]
    foreign_work_years: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sector: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    job_offer_province: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    family_regions: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    friend_regions: Option<String>,
}

impl ProfileRow {
    fn into_profile(self, row: usize) -> Result<ProgramProfile, IntakeError> {
        let education = self
            .education
            .parse::<ProgramEducation>()
            .map_err(|err| IntakeError::UnknownEducation {
                row,
                value: err.value,
            })?;

        let sector = self
            .sector
            .as_deref()
            .map(|label| label.parse::<Sector>().unwrap_or_default())
            .unwrap_or_default();

        let job_offer_province = self
            .job_offer_province
            .as_deref()
            .map(|code| parse_region(row, code))
            .transpose()?;

        Ok(ProgramProfile {
            age: self.age,
            education,
            english: self.english,
            french: self.french.unwrap_or(0),
            canadian_work_years: self.canadian_work_years.unwrap_or(0.0),
            foreign_work_years: self.foreign_work_years.unwrap_or(0.0),
            sector,
            job_offer_province,
            family_regions: parse_regions(row, self.family_regions.as_deref())?,
            friend_regions: parse_regions(row, self.friend_regions.as_deref())?,
        })
    }
}

fn parse_region(row: usize, code: &str) -> Result<Province, IntakeError> {
    code.parse::<Province>()
        .map_err(|err| IntakeError::UnknownRegion {
            row,
            value: err.value,
        })
}

fn parse_regions(row: usize, list: Option<&str>) -> Result<Vec<Province>, IntakeError> {
    let Some(list) = list else {
        return Ok(Vec::new());
    };

    list.split(';')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| parse_region(row, code))
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
