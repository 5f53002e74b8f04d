//! Scoring and risk components.
//!
//! Every function reachable from here is pure: profiles come in by reference,
//! fresh result values come out, and nothing is cached between calls.

pub mod defense;
pub mod domain;
pub mod grid;
pub mod language;
pub mod programs;

pub use domain::{BenchmarkSet, EducationLevel, OfficialLanguage, ProbabilityTier, Province};
