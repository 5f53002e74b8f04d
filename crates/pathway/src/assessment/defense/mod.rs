//! Inadmissibility classification and defense strategy engine.
//!
//! Rule sections run in a fixed order (criminality, medical, prior refusal,
//! procedural). Each produces an optional verdict candidate; the candidates are
//! reduced with "most severe wins", and the success probability starts at High
//! and can only be downgraded along the way.

pub mod domain;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    DefenseStrategy, Ground, LegalProfile, OffenseClass, RefusalReason, Section, SectionOutcome,
    SectionReport, Severity, Verdict,
};
pub use policy::LegalPolicy;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::domain::ProbabilityTier;
use rules::SectionFinding;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDefenseResult {
    pub verdict: Verdict,
    pub strategies: Vec<DefenseStrategy>,
    pub success_probability: ProbabilityTier,
    pub advisory_note: String,
    pub sections: Vec<SectionReport>,
}

/// Stateless analyzer that applies a [`LegalPolicy`] to risk profiles.
#[derive(Debug, Clone, Default)]
pub struct DefenseEngine {
    policy: LegalPolicy,
}

impl DefenseEngine {
    pub fn with_policy(policy: LegalPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LegalPolicy {
        &self.policy
    }

    pub fn analyze(&self, profile: &LegalProfile) -> LegalDefenseResult {
        let findings = [
            rules::criminality(profile, &self.policy),
            rules::medical(profile, &self.policy),
            rules::prior_refusal(profile),
            rules::procedural(profile),
        ];

        let verdict = findings
            .iter()
            .filter_map(|finding| finding.verdict)
            .fold(Verdict::default(), Verdict::most_severe);

        let success_probability = findings
            .iter()
            .filter_map(|finding| finding.probability)
            .fold(ProbabilityTier::High, ProbabilityTier::downgrade_to);

        let mut strategies = Vec::new();
        let mut sections = Vec::with_capacity(findings.len());
        for SectionFinding {
            section,
            outcome,
            strategies: found,
            ..
        } in findings
        {
            strategies.extend(found);
            sections.push(SectionReport { section, outcome });
        }
        strategies.sort_by_key(|strategy| strategy.priority);

        let advisory_note = advisory_note(&verdict, strategies.len(), success_probability, &sections);

        debug!(
            inadmissible = verdict.is_inadmissible,
            ground = ?verdict.ground,
            severity = %verdict.severity,
            probability = success_probability.label(),
            strategies = strategies.len(),
            "analyzed legal defense"
        );

        LegalDefenseResult {
            verdict,
            strategies,
            success_probability,
            advisory_note,
            sections,
        }
    }
}

/// Analyzes a profile under the default policy.
pub fn analyze_legal_defense(profile: &LegalProfile) -> LegalDefenseResult {
    DefenseEngine::default().analyze(profile)
}

fn advisory_note(
    verdict: &Verdict,
    strategy_count: usize,
    probability: ProbabilityTier,
    sections: &[SectionReport],
) -> String {
    let mut note = match (verdict.is_inadmissible, verdict.ground) {
        (true, Some(ground)) => format!(
            "Inadmissible on {ground} grounds (severity {}). {strategy_count} defense strategy(ies) identified; overall success probability {}.",
            verdict.severity,
            probability.label()
        ),
        (false, Some(Ground::DeemedRehabilitated)) => {
            "Criminal history is deemed rehabilitated; carry police certificates when travelling."
                .to_string()
        }
        _ => "No inadmissibility grounds identified from the supplied facts.".to_string(),
    };

    for report in sections {
        if let SectionOutcome::Skipped { reason } = &report.outcome {
            note.push_str(&format!(" {:?} not assessed: {reason}.", report.section));
        }
    }

    note.push_str(" This is an estimate, not legal advice.");
    note
}
