//! Published comprehensive ranking grid values.
//!
//! Keyed tables are ascending `(threshold, points)` pairs read through
//! [`lookup`]; fixed-domain tables are indexed arrays.

/// First age covered by the age arrays.
pub(crate) const AGE_TABLE_START: u32 = 17;

pub(crate) const AGE_SINGLE: [u32; 28] = [
    0, 99, 105, 110, 110, 110, 110, 110, 110, 110, 110, 110, 110, 105, 99, 94, 88, 83, 77, 72, 66,
    61, 55, 50, 39, 28, 17, 6,
];

pub(crate) const AGE_MARRIED: [u32; 28] = [
    0, 90, 95, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 95, 90, 85, 80, 75, 70, 65, 60,
    55, 50, 45, 35, 25, 15, 5,
];

// Indexed by `EducationLevel::index`.
pub(crate) const EDUCATION_SINGLE: [u32; 8] = [0, 30, 90, 98, 120, 128, 135, 150];
pub(crate) const EDUCATION_MARRIED: [u32; 8] = [0, 28, 84, 91, 112, 119, 126, 140];

// Per ability.
pub(crate) const FIRST_LANGUAGE_SINGLE: &[(u32, u32)] =
    &[(4, 6), (5, 6), (6, 9), (7, 17), (8, 23), (9, 31), (10, 34)];
pub(crate) const FIRST_LANGUAGE_MARRIED: &[(u32, u32)] =
    &[(4, 6), (5, 6), (6, 8), (7, 16), (8, 22), (9, 29), (10, 32)];

pub(crate) const SECOND_LANGUAGE: &[(u32, u32)] = &[(5, 1), (7, 3), (9, 6)];
pub(crate) const SECOND_LANGUAGE_CAP_SINGLE: u32 = 24;
pub(crate) const SECOND_LANGUAGE_CAP_MARRIED: u32 = 22;

pub(crate) const CANADIAN_WORK_SINGLE: &[(u32, u32)] =
    &[(1, 40), (2, 53), (3, 64), (4, 72), (5, 80)];
pub(crate) const CANADIAN_WORK_MARRIED: &[(u32, u32)] =
    &[(1, 35), (2, 46), (3, 56), (4, 63), (5, 70)];

pub(crate) const CORE_CAP_SINGLE: u32 = 500;
pub(crate) const CORE_CAP_MARRIED: u32 = 460;

pub(crate) const SPOUSE_EDUCATION: [u32; 8] = [0, 2, 6, 7, 8, 9, 10, 10];
pub(crate) const SPOUSE_LANGUAGE: &[(u32, u32)] = &[(5, 1), (7, 3), (9, 5)];
pub(crate) const SPOUSE_CANADIAN_WORK: &[(u32, u32)] =
    &[(1, 5), (2, 7), (3, 8), (4, 9), (5, 10)];
pub(crate) const SPOUSE_CAP: u32 = 40;

// Skill transferability. `[one credential, two or more / graduate]` by `[benchmark 7, benchmark 9]`.
pub(crate) const EDUCATION_LANGUAGE: [[u32; 2]; 2] = [[13, 25], [25, 50]];
// `[one credential, two or more / graduate]` by `[1 year, 2+ years]` of Canadian work.
pub(crate) const EDUCATION_CANADIAN_WORK: [[u32; 2]; 2] = [[13, 25], [25, 50]];
// `[1-2 years, 3+ years]` of foreign work by `[benchmark 7, benchmark 9]`.
pub(crate) const FOREIGN_WORK_LANGUAGE: [[u32; 2]; 2] = [[13, 25], [25, 50]];
// `[1-2 years, 3+ years]` of foreign work by `[1 year, 2+ years]` of Canadian work.
pub(crate) const FOREIGN_CANADIAN_WORK: [[u32; 2]; 2] = [[13, 25], [25, 50]];
pub(crate) const TRADE_CERTIFICATE: u32 = 50;
pub(crate) const TRANSFERABILITY_PAIR_CAP: u32 = 50;
pub(crate) const TRANSFERABILITY_CAP: u32 = 100;

pub(crate) const TRANSFERABILITY_LANGUAGE_GATE: u8 = 7;
pub(crate) const TRANSFERABILITY_LANGUAGE_UPPER: u8 = 9;
pub(crate) const FOREIGN_WORK_UPPER_YEARS: u32 = 3;

pub(crate) const SIBLING_BONUS: u32 = 15;
pub(crate) const FRENCH_GATE: u8 = 7;
pub(crate) const FRENCH_ENGLISH_GATE: u8 = 5;
pub(crate) const FRENCH_ONLY_BONUS: u32 = 25;
pub(crate) const FRENCH_BILINGUAL_BONUS: u32 = 50;
pub(crate) const CANADIAN_EDUCATION_SHORT: u32 = 15;
pub(crate) const CANADIAN_EDUCATION_LONG: u32 = 30;
pub(crate) const JOB_OFFER_SENIOR: u32 = 200;
pub(crate) const JOB_OFFER_MID: u32 = 50;
pub(crate) const NOMINATION_BONUS: u32 = 600;
pub(crate) const ADDITIONAL_CAP: u32 = 600;

pub(crate) use crate::assessment::domain::lookup;
