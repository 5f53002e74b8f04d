use super::common::*;
use crate::assessment::domain::ProbabilityTier;
use crate::assessment::programs::{evaluate_eligibility, ProgramId};

#[test]
fn every_program_reports_once() {
    let results = evaluate_eligibility(&profile());
    assert_eq!(results.len(), 6);
    for program in [
        ProgramId::FederalSkilledWorker,
        ProgramId::ExpressEntryEstimate,
        ProgramId::SaskatchewanSkilledWorker,
        ProgramId::ManitobaSkilledWorkerOverseas,
        ProgramId::BritishColumbiaSkillsImmigration,
        ProgramId::OntarioFrenchSpeakingSkilledWorker,
    ] {
        assert_eq!(
            results.iter().filter(|result| result.program == program).count(),
            1,
            "{program}"
        );
    }
}

#[test]
fn equal_tiers_keep_evaluation_order() {
    let results = evaluate_eligibility(&profile());
    let order: Vec<ProgramId> = results.iter().map(|result| result.program).collect();

    assert!(results
        .iter()
        .all(|result| result.probability == ProbabilityTier::None));
    assert_eq!(
        order,
        vec![
            ProgramId::FederalSkilledWorker,
            ProgramId::ExpressEntryEstimate,
            ProgramId::SaskatchewanSkilledWorker,
            ProgramId::ManitobaSkilledWorkerOverseas,
            ProgramId::BritishColumbiaSkillsImmigration,
            ProgramId::OntarioFrenchSpeakingSkilledWorker,
        ]
    );
}

#[test]
fn higher_tiers_sort_first_with_stable_ties() {
    let results = evaluate_eligibility(&strong_profile());
    let ranked: Vec<(ProgramId, ProbabilityTier)> = results
        .iter()
        .map(|result| (result.program, result.probability))
        .collect();

    assert_eq!(
        ranked,
        vec![
            (ProgramId::FederalSkilledWorker, ProbabilityTier::High),
            (ProgramId::ManitobaSkilledWorkerOverseas, ProbabilityTier::High),
            (ProgramId::BritishColumbiaSkillsImmigration, ProbabilityTier::Medium),
            (ProgramId::OntarioFrenchSpeakingSkilledWorker, ProbabilityTier::Medium),
            (ProgramId::ExpressEntryEstimate, ProbabilityTier::Low),
            (ProgramId::SaskatchewanSkilledWorker, ProbabilityTier::Low),
        ]
    );
    for pair in results.windows(2) {
        assert!(pair[0].probability <= pair[1].probability);
    }
}

#[test]
fn barely_eligible_program_is_rated_low() {
    let results = evaluate_eligibility(&strong_profile());
    let saskatchewan = results
        .iter()
        .find(|result| result.program == ProgramId::SaskatchewanSkilledWorker)
        .expect("saskatchewan evaluated");

    assert!(saskatchewan.eligible);
    assert_eq!(saskatchewan.score, Some(63));
    assert_eq!(saskatchewan.threshold, Some(60));
    assert_eq!(saskatchewan.probability, ProbabilityTier::Low);
}

#[test]
fn estimate_below_cutoff_is_not_eligible_but_still_tiered() {
    let results = evaluate_eligibility(&strong_profile());
    let estimate = results
        .iter()
        .find(|result| result.program == ProgramId::ExpressEntryEstimate)
        .expect("estimate evaluated");

    assert!(!estimate.eligible);
    assert_eq!(estimate.score, Some(484));
    assert_eq!(estimate.probability, ProbabilityTier::Low);
    assert!(estimate.reason.contains("below threshold 491"));
}

#[test]
fn checklist_is_offered_only_for_reachable_programs() {
    for result in evaluate_eligibility(&strong_profile()) {
        assert_eq!(
            result.checklist_id.as_deref(),
            Some(result.program.checklist_id())
        );
    }
    for result in evaluate_eligibility(&profile()) {
        assert!(result.checklist_id.is_none(), "{}", result.program_name);
    }
}

#[test]
fn evaluation_is_repeatable() {
    let applicant = strong_profile();
    let first = evaluate_eligibility(&applicant);
    assert_eq!(evaluate_eligibility(&applicant), first);
}
