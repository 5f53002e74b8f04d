use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use pathway::assessment::defense::{DefenseEngine, LegalPolicy, LegalProfile};
use pathway::assessment::grid::GridProfile;
use pathway::assessment::programs::ProgramProfile;
use pathway::error::AppError;
use pathway::intake::parse_program_profiles;
use pathway::{
    compute_grid_score, convert_to_benchmark, evaluate_eligibility, list_score_options,
    EligibilityResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cli::{ConvertArgs, EligibilityArgs, LegalArgs, OptionsArgs, ProfileArgs};

#[derive(Debug, Serialize)]
struct ConversionView {
    test: String,
    skill: String,
    score: f64,
    benchmark: u8,
}

#[derive(Debug, Serialize)]
struct RankedRow {
    row: usize,
    results: Vec<EligibilityResult>,
}

pub(crate) fn convert(args: ConvertArgs) -> Result<(), AppError> {
    let benchmark = convert_to_benchmark(&args.test, args.score, &args.skill)?;
    print_json(&ConversionView {
        test: args.test,
        skill: args.skill,
        score: args.score,
        benchmark,
    })
}

pub(crate) fn options(args: OptionsArgs) -> Result<(), AppError> {
    print_json(&list_score_options(&args.test, &args.skill)?)
}

pub(crate) fn grid(args: ProfileArgs) -> Result<(), AppError> {
    let profile: GridProfile = read_json(&args.profile)?;
    print_json(&compute_grid_score(&profile))
}

pub(crate) fn eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    match (args.profile, args.csv) {
        (_, Some(path)) => print_json(&rank_csv(File::open(path)?)?),
        (Some(path), None) => {
            let profile: ProgramProfile = read_json(&path)?;
            print_json(&evaluate_eligibility(&profile))
        }
        (None, None) => Ok(()),
    }
}

pub(crate) fn legal(args: LegalArgs, policy: LegalPolicy) -> Result<(), AppError> {
    let mut profile: LegalProfile = read_json(&args.profile)?;
    if let Some(date) = args.assessed_on {
        profile.assessed_on = date;
    }
    print_json(&DefenseEngine::with_policy(policy).analyze(&profile))
}

fn rank_csv<R: Read>(reader: R) -> Result<Vec<RankedRow>, AppError> {
    let rows = parse_program_profiles(BufReader::new(reader))?
        .iter()
        .enumerate()
        .map(|(index, profile)| RankedRow {
            row: index + 1,
            results: evaluate_eligibility(profile),
        })
        .collect();
    Ok(rows)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
