use serde::{Deserialize, Serialize};

use super::domain::OffenseClass;

const DEFAULT_SERIOUS_SENTENCE_YEARS: u8 = 10;
const DEFAULT_DEEMED_REHABILITATION_YEARS: u32 = 10;
const DEFAULT_REHABILITATION_APPLICATION_YEARS: u32 = 5;
/// Three times the average per-capita health and social services cost.
const DEFAULT_EXCESSIVE_DEMAND_THRESHOLD: u32 = 26_220;

/// Dials backing the defense engine's legal thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalPolicy {
    serious_sentence_years: u8,
    deemed_rehabilitation_years: u32,
    rehabilitation_application_years: u32,
    excessive_demand_threshold: u32,
}

impl LegalPolicy {
    /// Zero values fall back to the defaults, and the application window can
    /// never be longer than the deemed-rehabilitation window.
    pub fn new(
        serious_sentence_years: u8,
        deemed_rehabilitation_years: u32,
        rehabilitation_application_years: u32,
        excessive_demand_threshold: u32,
    ) -> Self {
        fn or_default<T: PartialEq + Default>(value: T, fallback: T) -> T {
            if value == T::default() {
                fallback
            } else {
                value
            }
        }

        let deemed_rehabilitation_years =
            or_default(deemed_rehabilitation_years, DEFAULT_DEEMED_REHABILITATION_YEARS);
        let rehabilitation_application_years = or_default(
            rehabilitation_application_years,
            DEFAULT_REHABILITATION_APPLICATION_YEARS,
        )
        .min(deemed_rehabilitation_years);

        Self {
            serious_sentence_years: or_default(
                serious_sentence_years,
                DEFAULT_SERIOUS_SENTENCE_YEARS,
            ),
            deemed_rehabilitation_years,
            rehabilitation_application_years,
            excessive_demand_threshold: or_default(
                excessive_demand_threshold,
                DEFAULT_EXCESSIVE_DEMAND_THRESHOLD,
            ),
        }
    }

    pub fn with_excessive_demand_threshold(self, threshold: u32) -> Self {
        Self::new(
            self.serious_sentence_years,
            self.deemed_rehabilitation_years,
            self.rehabilitation_application_years,
            threshold,
        )
    }

    pub fn with_serious_sentence_years(self, years: u8) -> Self {
        Self::new(
            years,
            self.deemed_rehabilitation_years,
            self.rehabilitation_application_years,
            self.excessive_demand_threshold,
        )
    }

    pub fn classify(&self, max_sentence_years: u8) -> OffenseClass {
        if max_sentence_years >= self.serious_sentence_years {
            OffenseClass::Serious
        } else {
            OffenseClass::NonSerious
        }
    }

    pub fn serious_sentence_years(&self) -> u8 {
        self.serious_sentence_years
    }

    pub fn deemed_rehabilitation_years(&self) -> u32 {
        self.deemed_rehabilitation_years
    }

    pub fn rehabilitation_application_years(&self) -> u32 {
        self.rehabilitation_application_years
    }

    pub fn excessive_demand_threshold(&self) -> u32 {
        self.excessive_demand_threshold
    }
}

impl Default for LegalPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_SERIOUS_SENTENCE_YEARS,
            DEFAULT_DEEMED_REHABILITATION_YEARS,
            DEFAULT_REHABILITATION_APPLICATION_YEARS,
            DEFAULT_EXCESSIVE_DEMAND_THRESHOLD,
        )
    }
}
