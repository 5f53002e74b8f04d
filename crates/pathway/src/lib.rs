//! Deterministic immigration estimation engine.
//!
//! The [`assessment`] module holds the four pure components: language benchmark
//! conversion, the comprehensive ranking grid, the multi-program evaluator, and
//! the inadmissibility defense engine. Everything else in the crate is the
//! ambient plumbing the command-line service needs around them.

pub mod assessment;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;

pub use assessment::defense::{analyze_legal_defense, DefenseEngine, LegalDefenseResult};
pub use assessment::grid::{compute_grid_score, ScoreResult};
pub use assessment::language::{convert_to_benchmark, list_score_options, ConversionError};
pub use assessment::programs::{evaluate_eligibility, EligibilityResult};
