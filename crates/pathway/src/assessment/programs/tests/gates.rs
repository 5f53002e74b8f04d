use super::common::*;
use crate::assessment::domain::{ProbabilityTier, Province};
use crate::assessment::programs::{
    evaluate_eligibility, EligibilityResult, ProgramEducation, ProgramId,
};

fn find(results: &[EligibilityResult], program: ProgramId) -> &EligibilityResult {
    results
        .iter()
        .find(|result| result.program == program)
        .expect("program evaluated")
}

#[test]
fn manitoba_requires_connection_regardless_of_score() {
    let results = evaluate_eligibility(&profile());
    let manitoba = find(&results, ProgramId::ManitobaSkilledWorkerOverseas);

    assert_eq!(manitoba.score, Some(72));
    assert!(manitoba.score >= manitoba.threshold);
    assert!(!manitoba.eligible);
    assert_eq!(manitoba.probability, ProbabilityTier::None);
    assert!(manitoba.reason.contains("Manitoba"));
}

#[test]
fn manitoba_accepts_a_friend_connection() {
    let mut applicant = profile();
    applicant.friend_regions.push(Province::Manitoba);

    let results = evaluate_eligibility(&applicant);
    let manitoba = find(&results, ProgramId::ManitobaSkilledWorkerOverseas);

    assert!(manitoba.eligible);
    assert_eq!(manitoba.score, Some(82));
    assert_eq!(manitoba.probability, ProbabilityTier::High);
}

#[test]
fn connection_elsewhere_does_not_open_manitoba() {
    let mut applicant = profile();
    applicant.family_regions.push(Province::Ontario);
    applicant.friend_regions.push(Province::Saskatchewan);

    let results = evaluate_eligibility(&applicant);
    assert!(!find(&results, ProgramId::ManitobaSkilledWorkerOverseas).eligible);
}

#[test]
fn federal_worker_requires_english_benchmark_seven() {
    let mut applicant = strong_profile();
    applicant.english = 6;

    let results = evaluate_eligibility(&applicant);
    let federal = find(&results, ProgramId::FederalSkilledWorker);

    assert!(!federal.eligible);
    assert_eq!(federal.probability, ProbabilityTier::None);
    assert!(federal.reason.contains("English benchmark 7"));
}

#[test]
fn federal_worker_scores_strong_profile() {
    let results = evaluate_eligibility(&strong_profile());
    let federal = find(&results, ProgramId::FederalSkilledWorker);

    assert!(federal.eligible);
    assert_eq!(federal.score, Some(96));
    assert_eq!(federal.threshold, Some(67));
}

#[test]
fn british_columbia_flags_placeholder_scoring() {
    let results = evaluate_eligibility(&strong_profile());
    let bc = find(&results, ProgramId::BritishColumbiaSkillsImmigration);

    assert!(bc.eligible);
    assert_eq!(bc.score, Some(103));
    assert!(bc.reason.contains("placeholder"));
}

#[test]
fn british_columbia_needs_local_offer() {
    let mut applicant = strong_profile();
    applicant.job_offer_province = Some(Province::Alberta);

    let results = evaluate_eligibility(&applicant);
    let bc = find(&results, ProgramId::BritishColumbiaSkillsImmigration);

    assert!(!bc.eligible);
    assert!(bc.reason.contains("British Columbia employer"));
}

#[test]
fn saskatchewan_needs_in_demand_sector_or_offer() {
    let mut applicant = strong_profile();
    applicant.sector = crate::assessment::programs::Sector::Business;

    let results = evaluate_eligibility(&applicant);
    let saskatchewan = find(&results, ProgramId::SaskatchewanSkilledWorker);
    assert!(!saskatchewan.eligible);

    applicant.job_offer_province = Some(Province::Saskatchewan);
    let results = evaluate_eligibility(&applicant);
    let saskatchewan = find(&results, ProgramId::SaskatchewanSkilledWorker);
    assert!(saskatchewan.eligible);
    assert_eq!(saskatchewan.score, Some(93));
}

#[test]
fn ontario_french_stream_has_no_score() {
    let results = evaluate_eligibility(&strong_profile());
    let ontario = find(&results, ProgramId::OntarioFrenchSpeakingSkilledWorker);

    assert!(ontario.eligible);
    assert_eq!(ontario.score, None);
    assert_eq!(ontario.threshold, None);
    assert_eq!(ontario.probability, ProbabilityTier::Medium);

    let results = evaluate_eligibility(&profile());
    let ontario = find(&results, ProgramId::OntarioFrenchSpeakingSkilledWorker);
    assert!(!ontario.eligible);
    assert!(ontario.reason.contains("French"));
}

#[test]
fn score_equal_to_pass_mark_is_eligible() {
    let mut applicant = profile();
    applicant.age = 36;
    applicant.french = 5;

    let results = evaluate_eligibility(&applicant);
    let federal = find(&results, ProgramId::FederalSkilledWorker);
    assert_eq!(federal.score, Some(67));
    assert_eq!(federal.threshold, Some(67));
    assert!(federal.eligible);
    assert_eq!(federal.probability, ProbabilityTier::Low);

    let mut connected = profile();
    connected.education = ProgramEducation::HighSchool;
    connected.foreign_work_years = 0.0;
    connected.family_regions.push(Province::Manitoba);

    let results = evaluate_eligibility(&connected);
    let manitoba = find(&results, ProgramId::ManitobaSkilledWorkerOverseas);
    assert_eq!(manitoba.score, Some(60));
    assert_eq!(manitoba.threshold, Some(60));
    assert!(manitoba.eligible);
    assert_eq!(manitoba.probability, ProbabilityTier::Low);
}
