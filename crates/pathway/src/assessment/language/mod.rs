//! Language test score to benchmark conversion.

mod bands;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{OfficialLanguage, ParseLabelError, MAX_BENCHMARK, MIN_BENCHMARK};
use bands::{level_for, Band};

/// Raised when a test or skill name is outside the supported vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("unsupported conversion for test '{test}' and skill '{skill}'")]
    UnsupportedConversion { test: String, skill: String },
}

/// Standardized tests whose results convert onto the benchmark scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageTest {
    Ielts,
    Celpip,
    Tef,
}

impl LanguageTest {
    pub const ALL: [LanguageTest; 3] = [LanguageTest::Ielts, LanguageTest::Celpip, LanguageTest::Tef];

    pub const fn language(self) -> OfficialLanguage {
        match self {
            LanguageTest::Ielts | LanguageTest::Celpip => OfficialLanguage::English,
            LanguageTest::Tef => OfficialLanguage::French,
        }
    }

    fn bands(self, skill: LanguageSkill) -> &'static [Band] {
        match (self, skill) {
            (LanguageTest::Ielts, LanguageSkill::Speaking) => bands::IELTS_SPEAKING,
            (LanguageTest::Ielts, LanguageSkill::Reading) => bands::IELTS_READING,
            (LanguageTest::Ielts, LanguageSkill::Writing) => bands::IELTS_WRITING,
            (LanguageTest::Ielts, LanguageSkill::Listening) => bands::IELTS_LISTENING,
            (LanguageTest::Tef, LanguageSkill::Speaking) => bands::TEF_SPEAKING,
            (LanguageTest::Tef, LanguageSkill::Reading) => bands::TEF_READING,
            (LanguageTest::Tef, LanguageSkill::Writing) => bands::TEF_WRITING,
            (LanguageTest::Tef, LanguageSkill::Listening) => bands::TEF_LISTENING,
            (LanguageTest::Celpip, _) => bands::CELPIP_ALIGNED,
        }
    }

    /// Benchmark level for a raw score. Scores under the lowest band clamp to
    /// the floor level; CELPIP scores clamp into the supported range.
    pub fn benchmark(self, skill: LanguageSkill, raw: f64) -> u8 {
        let level = match self {
            LanguageTest::Celpip if raw.is_nan() => MIN_BENCHMARK,
            LanguageTest::Celpip => raw
                .clamp(f64::from(MIN_BENCHMARK), f64::from(MAX_BENCHMARK))
                .floor() as u8,
            _ => level_for(self.bands(skill), raw).unwrap_or(MIN_BENCHMARK),
        };
        level.clamp(MIN_BENCHMARK, MAX_BENCHMARK)
    }

    /// Raw-score choices for range-limited inputs, one per table breakpoint.
    pub fn score_options(self, skill: LanguageSkill) -> Vec<ScoreOption> {
        let scale = match self.language() {
            OfficialLanguage::English => "CLB",
            OfficialLanguage::French => "NCLC",
        };

        self.bands(skill)
            .iter()
            .map(|entry| {
                let raw_label = match self {
                    LanguageTest::Ielts => format!("{:.1}", entry.min_raw),
                    LanguageTest::Celpip | LanguageTest::Tef => format!("{:.0}", entry.min_raw),
                };
                ScoreOption {
                    raw: entry.min_raw,
                    label: format!("{raw_label} ({scale} {})", entry.level),
                    level: self.benchmark(skill, entry.min_raw),
                }
            })
            .collect()
    }

    pub const fn label(self) -> &'static str {
        match self {
            LanguageTest::Ielts => "ielts",
            LanguageTest::Celpip => "celpip",
            LanguageTest::Tef => "tef",
        }
    }
}

impl FromStr for LanguageTest {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "ielts" | "ielts_general" | "ielts_gt" => Ok(LanguageTest::Ielts),
            "celpip" | "celpip_g" | "celpip_general" => Ok(LanguageTest::Celpip),
            "tef" | "tef_canada" => Ok(LanguageTest::Tef),
            _ => Err(ParseLabelError::new("language test", value)),
        }
    }
}

impl fmt::Display for LanguageTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSkill {
    Speaking,
    Reading,
    Writing,
    Listening,
}

impl LanguageSkill {
    pub const ALL: [LanguageSkill; 4] = [
        LanguageSkill::Speaking,
        LanguageSkill::Reading,
        LanguageSkill::Writing,
        LanguageSkill::Listening,
    ];
}

impl FromStr for LanguageSkill {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "speaking" => Ok(LanguageSkill::Speaking),
            "reading" => Ok(LanguageSkill::Reading),
            "writing" => Ok(LanguageSkill::Writing),
            "listening" => Ok(LanguageSkill::Listening),
            _ => Err(ParseLabelError::new("language skill", value)),
        }
    }
}

/// Selectable raw score annotated with the benchmark it converts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOption {
    pub raw: f64,
    pub label: String,
    pub level: u8,
}

fn resolve(test: &str, skill: &str) -> Result<(LanguageTest, LanguageSkill), ConversionError> {
    let unsupported = |_: ParseLabelError| ConversionError::UnsupportedConversion {
        test: test.to_string(),
        skill: skill.to_string(),
    };
    let parsed_test = test.parse::<LanguageTest>().map_err(unsupported)?;
    let parsed_skill = skill.parse::<LanguageSkill>().map_err(unsupported)?;
    Ok((parsed_test, parsed_skill))
}

/// Converts a named test's raw score for a named skill into a benchmark level.
pub fn convert_to_benchmark(test: &str, raw: f64, skill: &str) -> Result<u8, ConversionError> {
    let (test, skill) = resolve(test, skill)?;
    let level = test.benchmark(skill, raw);
    debug!(%test, ?skill, raw, level, "converted language score");
    Ok(level)
}

/// Lists the raw-score breakpoints for a named test and skill.
pub fn list_score_options(test: &str, skill: &str) -> Result<Vec<ScoreOption>, ConversionError> {
    let (test, skill) = resolve(test, skill)?;
    Ok(test.score_options(skill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_ielts_reading_breakpoints() {
        assert_eq!(convert_to_benchmark("ielts", 6.0, "reading"), Ok(7));
        assert_eq!(convert_to_benchmark("IELTS", 6.5, "reading"), Ok(8));
        assert_eq!(convert_to_benchmark("ielts", 8.0, "reading"), Ok(10));
        assert_eq!(convert_to_benchmark("ielts", 9.0, "reading"), Ok(10));
    }

    #[test]
    fn low_scores_clamp_to_floor_level() {
        assert_eq!(convert_to_benchmark("ielts", 2.0, "listening"), Ok(4));
        assert_eq!(convert_to_benchmark("tef", 0.0, "speaking"), Ok(4));
        assert_eq!(convert_to_benchmark("celpip", 1.0, "writing"), Ok(4));
    }

    #[test]
    fn celpip_is_clamped_into_supported_range() {
        assert_eq!(convert_to_benchmark("celpip", 9.0, "speaking"), Ok(9));
        assert_eq!(convert_to_benchmark("celpip", 12.0, "speaking"), Ok(12));
        assert_eq!(convert_to_benchmark("celpip", 15.0, "speaking"), Ok(12));
        assert_eq!(convert_to_benchmark("celpip", f64::NAN, "speaking"), Ok(4));
    }

    #[test]
    fn tef_listening_uses_its_own_scale() {
        assert_eq!(convert_to_benchmark("tef", 249.0, "listening"), Ok(7));
        assert_eq!(convert_to_benchmark("tef", 248.0, "listening"), Ok(6));
        assert_eq!(convert_to_benchmark("tef_canada", 316.0, "listening"), Ok(10));
    }

    #[test]
    fn unknown_names_are_rejected() {
        match convert_to_benchmark("toefl", 100.0, "reading") {
            Err(ConversionError::UnsupportedConversion { test, skill }) => {
                assert_eq!(test, "toefl");
                assert_eq!(skill, "reading");
            }
            other => panic!("expected unsupported conversion, got {other:?}"),
        }
        assert!(convert_to_benchmark("ielts", 7.0, "grammar").is_err());
        assert!(list_score_options("duolingo", "reading").is_err());
    }

    #[test]
    fn conversion_is_monotonic_for_every_test_and_skill() {
        for test in LanguageTest::ALL {
            for skill in LanguageSkill::ALL {
                let mut previous = 0;
                let mut raw = 0.0;
                while raw <= 500.0 {
                    let level = test.benchmark(skill, raw);
                    assert!(
                        level >= previous,
                        "{test} {skill:?} dropped from {previous} to {level} at {raw}"
                    );
                    previous = level;
                    raw += 0.5;
                }
            }
        }
    }

    #[test]
    fn options_match_conversion_breakpoints() {
        for test in LanguageTest::ALL {
            for skill in LanguageSkill::ALL {
                let options = test.score_options(skill);
                assert!(!options.is_empty());
                for option in &options {
                    assert_eq!(option.level, test.benchmark(skill, option.raw));
                }
                for pair in options.windows(2) {
                    assert!(pair[0].level < pair[1].level);
                }
            }
        }
    }

    #[test]
    fn option_labels_name_the_scale() {
        let options = list_score_options("ielts", "speaking").expect("supported");
        assert_eq!(options[0].label, "4.0 (CLB 4)");
        let options = list_score_options("tef", "reading").expect("supported");
        assert_eq!(options.last().map(|o| o.label.as_str()), Some("263 (NCLC 10)"));
    }

    #[test]
    fn unknown_labels_report_their_vocabulary() {
        match "toefl".parse::<LanguageTest>() {
            Err(err) => {
                assert_eq!(err.kind, "language test");
                assert_eq!(err.value, "toefl");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        match "grammar".parse::<LanguageSkill>() {
            Err(err) => assert_eq!(err.kind, "language skill"),
            other => panic!("expected parse error, got {other:?}"),
        }
        assert_eq!(
            convert_to_benchmark("ielts", 7.0, "grammar"),
            Err(ConversionError::UnsupportedConversion {
                test: "ielts".to_string(),
                skill: "grammar".to_string(),
            })
        );
    }
}
