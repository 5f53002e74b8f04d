use pathway::assessment::programs::{ProgramId, ProgramProfile};
use pathway::assessment::{ProbabilityTier, Province};
use pathway::evaluate_eligibility;
use pathway::intake::parse_program_profiles;

const CSV: &str = "\
age,education,english,french,canadian_work_years,foreign_work_years,sector,job_offer_province,family_regions,friend_regions
29,masters,9,7,1,3,healthcare,BC,MB,
30,bachelors,8,,,3,technology,,,
";

#[test]
fn csv_rows_rank_like_json_profiles() {
    let rows = parse_program_profiles(CSV.as_bytes()).expect("csv parses");
    let from_json: ProgramProfile = serde_json::from_value(serde_json::json!({
        "age": 29,
        "education": "masters",
        "english": 9,
        "french": 7,
        "canadian_work_years": 1.0,
        "foreign_work_years": 3.0,
        "sector": "healthcare",
        "job_offer_province": "british_columbia",
        "family_regions": ["manitoba"]
    }))
    .expect("json profile deserializes");

    assert_eq!(rows[0], from_json);
    assert_eq!(evaluate_eligibility(&rows[0]), evaluate_eligibility(&from_json));
}

#[test]
fn strong_applicant_ranks_best_programs_first() {
    let rows = parse_program_profiles(CSV.as_bytes()).expect("csv parses");
    let results = evaluate_eligibility(&rows[0]);

    let tiers: Vec<ProbabilityTier> = results.iter().map(|result| result.probability).collect();
    let mut sorted = tiers.clone();
    sorted.sort();
    assert_eq!(tiers, sorted);

    assert_eq!(results[0].program, ProgramId::FederalSkilledWorker);
    assert_eq!(results[0].probability, ProbabilityTier::High);
    assert_eq!(results[0].checklist_id.as_deref(), Some("fsw-standard"));

    let ontario = results
        .iter()
        .find(|result| result.program == ProgramId::OntarioFrenchSpeakingSkilledWorker)
        .expect("ontario evaluated");
    assert!(ontario.eligible);
    assert_eq!(ontario.score, None);
    assert_eq!(ontario.threshold, None);
}

#[test]
fn failed_gates_carry_reasons_and_no_checklist() {
    let rows = parse_program_profiles(CSV.as_bytes()).expect("csv parses");
    let results = evaluate_eligibility(&rows[1]);

    assert_eq!(rows[1].job_offer_province, None::<Province>);
    assert_eq!(results.len(), 6);
    for result in &results {
        assert_eq!(result.probability, ProbabilityTier::None);
        assert!(result.checklist_id.is_none());
        assert!(!result.reason.is_empty());
    }
}
