use super::common::*;
use crate::assessment::defense::{
    analyze_legal_defense, DefenseEngine, Ground, LegalPolicy, RefusalReason, SectionOutcome,
    Severity,
};
use crate::assessment::domain::ProbabilityTier;

#[test]
fn costly_medical_condition_is_excessive_demand() {
    let mut profile = clean_profile();
    profile.has_medical_condition = true;
    profile.annual_treatment_cost = 40_000;

    let result = analyze_legal_defense(&profile);

    assert!(result.verdict.is_inadmissible);
    assert_eq!(result.verdict.ground, Some(Ground::ExcessiveDemand));
    assert_eq!(
        result.verdict.ground.map(|ground| ground.label()),
        Some("Excessive Demand on Health Services")
    );
    assert_eq!(result.verdict.severity, Severity::High);
    assert_eq!(result.success_probability, ProbabilityTier::Medium);
    assert!(result
        .strategies
        .iter()
        .any(|strategy| strategy.title == "Mitigation Plan"));
}

#[test]
fn treatment_cost_at_threshold_is_not_excessive() {
    let mut profile = clean_profile();
    profile.has_medical_condition = true;
    profile.annual_treatment_cost = 26_220;

    let result = analyze_legal_defense(&profile);

    assert!(!result.verdict.is_inadmissible);
    assert_eq!(result.sections[1].outcome, SectionOutcome::Clear);
}

#[test]
fn serious_criminality_survives_a_clear_medical_check() {
    let mut profile = criminal_profile(14, Some(3));
    profile.has_medical_condition = true;
    profile.annual_treatment_cost = 1_000;

    let result = analyze_legal_defense(&profile);

    assert_eq!(result.verdict.ground, Some(Ground::SeriousCriminality));
    assert_eq!(result.verdict.severity, Severity::Critical);
}

#[test]
fn less_severe_later_ground_does_not_replace_critical() {
    let mut profile = criminal_profile(14, Some(3));
    profile.has_medical_condition = true;
    profile.annual_treatment_cost = 50_000;

    let result = analyze_legal_defense(&profile);

    assert_eq!(result.verdict.ground, Some(Ground::SeriousCriminality));
    assert_eq!(result.strategies.len(), 2);
}

#[test]
fn equally_severe_later_ground_takes_precedence() {
    let mut profile = criminal_profile(14, Some(7));
    profile.has_medical_condition = true;
    profile.annual_treatment_cost = 50_000;

    let result = analyze_legal_defense(&profile);

    assert_eq!(result.verdict.ground, Some(Ground::ExcessiveDemand));
    assert_eq!(result.verdict.severity, Severity::High);
}

#[test]
fn misrepresentation_is_critical_with_low_probability() {
    let mut profile = criminal_profile(5, Some(11));
    profile.prior_refusal = Some(RefusalReason::Misrepresentation);

    let result = analyze_legal_defense(&profile);

    assert!(result.verdict.is_inadmissible);
    assert_eq!(result.verdict.ground, Some(Ground::Misrepresentation));
    assert_eq!(result.verdict.severity, Severity::Critical);
    assert_eq!(result.success_probability, ProbabilityTier::Low);
    assert!(result
        .strategies
        .iter()
        .any(|strategy| strategy.title == "Materiality Challenge"));
}

#[test]
fn probability_is_never_upgraded_by_later_sections() {
    let mut profile = criminal_profile(2, Some(1));
    profile.has_medical_condition = true;
    profile.annual_treatment_cost = 50_000;

    let result = analyze_legal_defense(&profile);

    assert_eq!(result.success_probability, ProbabilityTier::Low);
}

#[test]
fn reference_letter_refusal_adds_evidence_without_changing_verdict() {
    let mut profile = clean_profile();
    profile.has_medical_condition = true;
    profile.annual_treatment_cost = 50_000;
    let baseline = analyze_legal_defense(&profile);

    profile.prior_refusal = Some(RefusalReason::InsufficientReferenceLetter);
    let result = analyze_legal_defense(&profile);

    assert_eq!(result.verdict, baseline.verdict);
    assert_eq!(result.success_probability, baseline.success_probability);
    assert!(result
        .strategies
        .iter()
        .any(|strategy| strategy.title == "Strengthened Employment Evidence"));
}

#[test]
fn flagpoling_strategy_is_appended_last_and_never_changes_verdict() {
    let mut profile = criminal_profile(5, Some(6));
    profile.flagpoling_planned = true;
    profile.prior_refusal = Some(RefusalReason::InsufficientReferenceLetter);

    let result = analyze_legal_defense(&profile);

    assert_eq!(result.verdict.ground, Some(Ground::Criminality));
    let titles: Vec<&str> = result
        .strategies
        .iter()
        .map(|strategy| strategy.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Criminal Rehabilitation Application",
            "Strengthened Employment Evidence",
            "Flagpoling Contingency",
        ]
    );
    for pair in result.strategies.windows(2) {
        assert!(pair[0].priority <= pair[1].priority);
    }

    let mut flag_only = clean_profile();
    flag_only.flagpoling_planned = true;
    let result = analyze_legal_defense(&flag_only);
    assert!(!result.verdict.is_inadmissible);
    assert_eq!(result.success_probability, ProbabilityTier::High);
    assert_eq!(result.strategies.len(), 1);
}

#[test]
fn custom_policy_moves_medical_threshold() {
    let mut profile = clean_profile();
    profile.has_medical_condition = true;
    profile.annual_treatment_cost = 40_000;

    let engine =
        DefenseEngine::with_policy(LegalPolicy::default().with_excessive_demand_threshold(45_000));
    let result = engine.analyze(&profile);

    assert!(!result.verdict.is_inadmissible);
}

#[test]
fn analysis_is_repeatable() {
    let mut profile = criminal_profile(14, Some(3));
    profile.flagpoling_planned = true;
    let first = analyze_legal_defense(&profile);
    assert_eq!(analyze_legal_defense(&profile), first);
}
