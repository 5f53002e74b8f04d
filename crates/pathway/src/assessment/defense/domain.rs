use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assessment::domain::ParseLabelError;

/// Risk facts supplied for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalProfile {
    /// Date elapsed-time rules are measured against.
    pub assessed_on: NaiveDate,
    #[serde(default)]
    pub has_criminal_record: bool,
    /// Maximum sentence the equivalent offense carries in Canada.
    #[serde(default)]
    pub max_sentence_years: u8,
    #[serde(default)]
    pub sentence_completed_on: Option<NaiveDate>,
    #[serde(default)]
    pub has_medical_condition: bool,
    /// Projected yearly cost of treatment, in Canadian dollars.
    #[serde(default)]
    pub annual_treatment_cost: u32,
    #[serde(default)]
    pub prior_refusal: Option<RefusalReason>,
    #[serde(default)]
    pub flagpoling_planned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefusalReason {
    Misrepresentation,
    InsufficientReferenceLetter,
    Other,
}

impl FromStr for RefusalReason {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "misrepresentation" => Ok(Self::Misrepresentation),
            "reference_letter" | "insufficient_reference_letter" | "employment_letter" => {
                Ok(Self::InsufficientReferenceLetter)
            }
            "other" => Ok(Self::Other),
            _ => Err(ParseLabelError {
                kind: "refusal reason",
                value: value.to_string(),
            }),
        }
    }
}

/// Offense seriousness as classified by the policy's sentence cut-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffenseClass {
    Serious,
    NonSerious,
}

/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ground {
    SeriousCriminality,
    Criminality,
    DeemedRehabilitated,
    ExcessiveDemand,
    Misrepresentation,
}

impl Ground {
    pub const fn label(self) -> &'static str {
        match self {
            Ground::SeriousCriminality => "Serious Criminality",
            Ground::Criminality => "Criminality",
            Ground::DeemedRehabilitated => "Deemed Rehabilitated",
            Ground::ExcessiveDemand => "Excessive Demand on Health Services",
            Ground::Misrepresentation => "Misrepresentation",
        }
    }
}

impl fmt::Display for Ground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inadmissibility finding. `ground` is only meaningful when set; severity
/// keeps its default when nothing was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_inadmissible: bool,
    pub ground: Option<Ground>,
    pub severity: Severity,
}

impl Verdict {
    pub fn inadmissible(ground: Ground, severity: Severity) -> Self {
        Self {
            is_inadmissible: true,
            ground: Some(ground),
            severity,
        }
    }

    /// Inadmissible verdicts outrank admissible ones, then severity decides.
    fn rank(&self) -> (bool, Severity) {
        (self.is_inadmissible, self.severity)
    }

    /// Keeps the more severe verdict; on a tie the later candidate wins.
    pub fn most_severe(self, candidate: Verdict) -> Verdict {
        if candidate.rank() >= self.rank() {
            candidate
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseStrategy {
    /// 1 is pursued first.
    pub priority: u8,
    pub title: String,
    pub arguments: Vec<String>,
    pub required_documents: Vec<String>,
}

impl DefenseStrategy {
    pub(crate) fn new(priority: u8, title: &str, arguments: &[&str], documents: &[&str]) -> Self {
        Self {
            priority,
            title: title.to_string(),
            arguments: arguments.iter().map(|item| item.to_string()).collect(),
            required_documents: documents.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// Rule sections in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Criminality,
    Medical,
    PriorRefusal,
    Procedural,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SectionOutcome {
    /// The section's facts were absent.
    NotApplicable,
    /// Facts were present but a required detail was missing.
    Skipped { reason: String },
    /// Evaluated without producing a verdict.
    Clear,
    /// Evaluated and produced a verdict candidate or strategies.
    Finding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    pub section: Section,
    pub outcome: SectionOutcome,
}
