use chrono::{Datelike, NaiveDate};

use super::domain::{
    DefenseStrategy, Ground, LegalProfile, OffenseClass, RefusalReason, Section, SectionOutcome,
    Severity, Verdict,
};
use super::policy::LegalPolicy;
use crate::assessment::domain::ProbabilityTier;

const PRIMARY: u8 = 1;
const SUPPORTING: u8 = 2;
const PROCEDURAL: u8 = 3;

/// What one rule section contributes to the overall result.
pub(crate) struct SectionFinding {
    pub section: Section,
    pub outcome: SectionOutcome,
    pub verdict: Option<Verdict>,
    pub probability: Option<ProbabilityTier>,
    pub strategies: Vec<DefenseStrategy>,
}

impl SectionFinding {
    fn quiet(section: Section, outcome: SectionOutcome) -> Self {
        Self {
            section,
            outcome,
            verdict: None,
            probability: None,
            strategies: Vec::new(),
        }
    }

    fn finding(
        section: Section,
        verdict: Option<Verdict>,
        probability: Option<ProbabilityTier>,
        strategies: Vec<DefenseStrategy>,
    ) -> Self {
        Self {
            section,
            outcome: SectionOutcome::Finding,
            verdict,
            probability,
            strategies,
        }
    }
}

/// Whole years from `since` to `until`; dates in the future count as zero.
pub(crate) fn full_years_between(since: NaiveDate, until: NaiveDate) -> u32 {
    if until <= since {
        return 0;
    }
    let mut years = until.year() - since.year();
    if (until.month(), until.day()) < (since.month(), since.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

fn rehabilitation_application() -> DefenseStrategy {
    DefenseStrategy::new(
        PRIMARY,
        "Criminal Rehabilitation Application",
        &[
            "Five or more years have passed since the sentence was completed",
            "No further offenses since sentence completion",
            "Stable employment and community ties demonstrate rehabilitation",
        ],
        &[
            "Police certificates from every country of residence",
            "Court records and proof of sentence completion",
            "Personal statement of rehabilitation",
            "Reference letters",
        ],
    )
}

fn temporary_resident_permit() -> DefenseStrategy {
    DefenseStrategy::new(
        PRIMARY,
        "Temporary Resident Permit",
        &[
            "Need to enter Canada outweighs the risk posed",
            "Compelling hardship or humanitarian reasons for travel",
        ],
        &[
            "Letter explaining the purpose and urgency of travel",
            "Court records and proof of sentence completion",
            "Evidence of hardship",
        ],
    )
}

pub(crate) fn criminality(profile: &LegalProfile, policy: &LegalPolicy) -> SectionFinding {
    if !profile.has_criminal_record {
        return SectionFinding::quiet(Section::Criminality, SectionOutcome::NotApplicable);
    }

    let Some(completed_on) = profile.sentence_completed_on else {
        return SectionFinding::quiet(
            Section::Criminality,
            SectionOutcome::Skipped {
                reason: "sentence completion date missing".to_string(),
            },
        );
    };

    let elapsed = full_years_between(completed_on, profile.assessed_on);
    let can_apply = elapsed >= policy.rehabilitation_application_years();

    match policy.classify(profile.max_sentence_years) {
        OffenseClass::Serious if can_apply => SectionFinding::finding(
            Section::Criminality,
            Some(Verdict::inadmissible(Ground::SeriousCriminality, Severity::High)),
            Some(ProbabilityTier::Medium),
            vec![rehabilitation_application()],
        ),
        OffenseClass::Serious => SectionFinding::finding(
            Section::Criminality,
            Some(Verdict::inadmissible(
                Ground::SeriousCriminality,
                Severity::Critical,
            )),
            Some(ProbabilityTier::Low),
            vec![temporary_resident_permit()],
        ),
        OffenseClass::NonSerious if elapsed >= policy.deemed_rehabilitation_years() => {
            SectionFinding::finding(
                Section::Criminality,
                Some(Verdict {
                    is_inadmissible: false,
                    ground: Some(Ground::DeemedRehabilitated),
                    severity: Severity::Low,
                }),
                None,
                vec![DefenseStrategy::new(
                    SUPPORTING,
                    "Deemed Rehabilitation Confirmation",
                    &["Ten or more years have passed since a single non-serious offense"],
                    &[
                        "Police certificates from every country of residence",
                        "Proof of sentence completion date",
                    ],
                )],
            )
        }
        OffenseClass::NonSerious if can_apply => SectionFinding::finding(
            Section::Criminality,
            Some(Verdict::inadmissible(Ground::Criminality, Severity::Medium)),
            Some(ProbabilityTier::Medium),
            vec![rehabilitation_application()],
        ),
        OffenseClass::NonSerious => SectionFinding::finding(
            Section::Criminality,
            Some(Verdict::inadmissible(Ground::Criminality, Severity::High)),
            Some(ProbabilityTier::Low),
            vec![temporary_resident_permit()],
        ),
    }
}

pub(crate) fn medical(profile: &LegalProfile, policy: &LegalPolicy) -> SectionFinding {
    if !profile.has_medical_condition {
        return SectionFinding::quiet(Section::Medical, SectionOutcome::NotApplicable);
    }

    if profile.annual_treatment_cost <= policy.excessive_demand_threshold() {
        return SectionFinding::quiet(Section::Medical, SectionOutcome::Clear);
    }

    SectionFinding::finding(
        Section::Medical,
        Some(Verdict::inadmissible(Ground::ExcessiveDemand, Severity::High)),
        Some(ProbabilityTier::Medium),
        vec![DefenseStrategy::new(
            PRIMARY,
            "Mitigation Plan",
            &[
                "Household can cover projected treatment costs privately",
                "Projected costs are overstated or can be reduced",
                "Declaration of ability and intent to pay",
            ],
            &[
                "Treating physician cost assessment",
                "Private insurance coverage proof",
                "Financial statements showing ability to pay",
                "Signed declaration of ability and intent",
            ],
        )],
    )
}

pub(crate) fn prior_refusal(profile: &LegalProfile) -> SectionFinding {
    match profile.prior_refusal {
        None => SectionFinding::quiet(Section::PriorRefusal, SectionOutcome::NotApplicable),
        Some(RefusalReason::Misrepresentation) => SectionFinding::finding(
            Section::PriorRefusal,
            Some(Verdict::inadmissible(
                Ground::Misrepresentation,
                Severity::Critical,
            )),
            Some(ProbabilityTier::Low),
            vec![DefenseStrategy::new(
                PRIMARY,
                "Materiality Challenge",
                &[
                    "The omitted or incorrect information was not material to the decision",
                    "The error was honest and reasonable",
                    "The information was corrected before a decision was made",
                ],
                &[
                    "Copy of the refusal letter and officer notes",
                    "Evidence supporting the original submission",
                    "Sworn statement explaining the discrepancy",
                ],
            )],
        ),
        Some(RefusalReason::InsufficientReferenceLetter) => SectionFinding::finding(
            Section::PriorRefusal,
            None,
            None,
            vec![DefenseStrategy::new(
                SUPPORTING,
                "Strengthened Employment Evidence",
                &["Duties, hours, and dates now documented to the required standard"],
                &[
                    "Reference letters on company letterhead with duties and hours",
                    "Pay stubs and tax records",
                    "Employment contracts",
                ],
            )],
        ),
        Some(RefusalReason::Other) => {
            SectionFinding::quiet(Section::PriorRefusal, SectionOutcome::Clear)
        }
    }
}

pub(crate) fn procedural(profile: &LegalProfile) -> SectionFinding {
    if !profile.flagpoling_planned {
        return SectionFinding::quiet(Section::Procedural, SectionOutcome::NotApplicable);
    }

    SectionFinding::finding(
        Section::Procedural,
        None,
        None,
        vec![DefenseStrategy::new(
            PROCEDURAL,
            "Flagpoling Contingency",
            &[
                "Port of entry may limit or refuse flagpoling service hours",
                "Inland processing remains available as a fallback",
            ],
            &[
                "Complete application package with originals",
                "Proof of current status in Canada",
            ],
        )],
    )
}
