//! Comprehensive ranking grid calculator.
//!
//! Scores a [`GridProfile`] under the published four-section grid: core human
//! capital, spouse factors, skill transferability, and additional points. Each
//! section subtotal is capped independently and the grand total is their sum.

pub mod domain;
mod rules;
mod tables;

#[cfg(test)]
mod tests;

pub use domain::{
    AdditionalFactors, CanadianEducation, GridProfile, JobOffer, MaritalStatus, SpouseProfile,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Subtotal per grid section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTotals {
    pub core: u32,
    pub spouse: u32,
    pub transferability: u32,
    pub additional: u32,
}

impl SectionTotals {
    pub fn sum(&self) -> u32 {
        self.core + self.spouse + self.transferability + self.additional
    }
}

/// Per-factor points before section caps, for transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub age: u32,
    pub education: u32,
    pub first_language: u32,
    pub second_language: u32,
    pub canadian_work: u32,
    pub spouse_education: u32,
    pub spouse_language: u32,
    pub spouse_work: u32,
    pub education_language: u32,
    pub education_canadian_work: u32,
    pub foreign_work_language: u32,
    pub foreign_canadian_work: u32,
    pub trade_certificate: u32,
    pub sibling: u32,
    pub french: u32,
    pub canadian_education: u32,
    pub job_offer: u32,
    pub nomination: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total: u32,
    pub sections: SectionTotals,
    pub breakdown: ScoreBreakdown,
    /// Section ceilings that applied to this profile.
    pub max_possible: SectionTotals,
}

/// Scores a profile under the comprehensive ranking grid.
pub fn compute_grid_score(profile: &GridProfile) -> ScoreResult {
    let married = profile.is_married();

    let core = rules::core_factors(profile);
    let spouse = rules::spouse_factors(profile);
    let transferability = rules::transferability_factors(profile);
    let additional = rules::additional_points(profile);

    let sections = SectionTotals {
        core: core.subtotal(married),
        spouse: spouse.subtotal(),
        transferability: transferability.subtotal(),
        additional: additional.subtotal(),
    };

    let max_possible = SectionTotals {
        core: if married {
            tables::CORE_CAP_MARRIED
        } else {
            tables::CORE_CAP_SINGLE
        },
        spouse: if married { tables::SPOUSE_CAP } else { 0 },
        transferability: tables::TRANSFERABILITY_CAP,
        additional: tables::ADDITIONAL_CAP,
    };

    let breakdown = ScoreBreakdown {
        age: core.age,
        education: core.education,
        first_language: core.first_language,
        second_language: core.second_language,
        canadian_work: core.canadian_work,
        spouse_education: spouse.education,
        spouse_language: spouse.language,
        spouse_work: spouse.canadian_work,
        education_language: transferability.education_language,
        education_canadian_work: transferability.education_canadian_work,
        foreign_work_language: transferability.foreign_work_language,
        foreign_canadian_work: transferability.foreign_canadian_work,
        trade_certificate: transferability.trade_certificate,
        sibling: additional.sibling,
        french: additional.french,
        canadian_education: additional.canadian_education,
        job_offer: additional.job_offer,
        nomination: additional.nomination,
    };

    let total = sections.sum();
    debug!(
        age = profile.age,
        married,
        core = sections.core,
        spouse = sections.spouse,
        transferability = sections.transferability,
        additional = sections.additional,
        total,
        "computed grid score"
    );

    ScoreResult {
        total,
        sections,
        breakdown,
        max_possible,
    }
}
