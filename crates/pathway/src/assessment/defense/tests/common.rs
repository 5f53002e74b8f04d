use chrono::NaiveDate;

use crate::assessment::defense::LegalProfile;

pub(super) fn assessed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

pub(super) fn years_ago(years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025 - years, 9, 1).expect("valid date")
}

pub(super) fn clean_profile() -> LegalProfile {
    LegalProfile {
        assessed_on: assessed_on(),
        has_criminal_record: false,
        max_sentence_years: 0,
        sentence_completed_on: None,
        has_medical_condition: false,
        annual_treatment_cost: 0,
        prior_refusal: None,
        flagpoling_planned: false,
    }
}

pub(super) fn criminal_profile(max_sentence_years: u8, completed_years_ago: Option<i32>) -> LegalProfile {
    LegalProfile {
        has_criminal_record: true,
        max_sentence_years,
        sentence_completed_on: completed_years_ago.map(years_ago),
        ..clean_profile()
    }
}
