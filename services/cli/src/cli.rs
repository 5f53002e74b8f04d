use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pathway::config::AppConfig;
use pathway::error::AppError;
use pathway::telemetry;
use tracing::info;

use crate::commands;

#[derive(Parser, Debug)]
#[command(
    name = "pathway",
    about = "Estimate benchmarks, ranking scores, program eligibility and admissibility risk",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a raw test score to a benchmark level
    Convert(ConvertArgs),
    /// List the selectable raw scores for a test and skill
    Options(OptionsArgs),
    /// Score a profile on the comprehensive ranking grid
    Grid(ProfileArgs),
    /// Rank program eligibility for one JSON profile or every CSV row
    Eligibility(EligibilityArgs),
    /// Classify inadmissibility risk and recommend defense strategies
    Legal(LegalArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// Test name (ielts, celpip, tef)
    #[arg(long)]
    pub(crate) test: String,
    /// Skill name (speaking, reading, writing, listening)
    #[arg(long)]
    pub(crate) skill: String,
    /// Raw score as printed on the result sheet
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) score: f64,
}

#[derive(Args, Debug)]
pub(crate) struct OptionsArgs {
    #[arg(long)]
    pub(crate) test: String,
    #[arg(long)]
    pub(crate) skill: String,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// JSON profile document
    #[arg(long)]
    pub(crate) profile: PathBuf,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct EligibilityArgs {
    /// JSON profile document
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// CSV file with one profile per row
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct LegalArgs {
    /// JSON risk profile document
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Override the assessment date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) assessed_on: Option<NaiveDate>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "pathway cli started");

    match cli.command {
        Command::Convert(args) => commands::convert(args),
        Command::Options(args) => commands::options(args),
        Command::Grid(args) => commands::grid(args),
        Command::Eligibility(args) => commands::eligibility(args),
        Command::Legal(args) => commands::legal(args, config.legal),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn eligibility_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["pathway", "eligibility"]).is_err());
        assert!(Cli::try_parse_from([
            "pathway",
            "eligibility",
            "--profile",
            "a.json",
            "--csv",
            "b.csv"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["pathway", "eligibility", "--csv", "b.csv"]).is_ok());
    }

    #[test]
    fn legal_date_override_parses() {
        let cli = Cli::try_parse_from([
            "pathway",
            "legal",
            "--profile",
            "risk.json",
            "--assessed-on",
            "2025-09-01",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Legal(args) => {
                assert_eq!(args.assessed_on, NaiveDate::from_ymd_opt(2025, 9, 1))
            }
            other => panic!("expected legal command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_date() {
        assert!(parse_date("09/01/2025").is_err());
    }
}
