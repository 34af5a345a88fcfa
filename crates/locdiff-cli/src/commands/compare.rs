//! Snapshot compare command

use crate::settings::{resolve, FileSettings, FlagSettings};
use clap::Args;
use locdiff_core::diff::{build_report, render_human_summary};
use locdiff_core::logging_facility::{self, Profile};
use locdiff_store::{load_snapshot, suggested_output_path, write_report_json};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Old snapshot (SQLite database or .json)
    #[arg(long)]
    pub old: PathBuf,

    /// New snapshot (SQLite database or .json)
    #[arg(long)]
    pub new: PathBuf,

    /// Report path (defaults to diff__<old>__VS__<new>.json next to the old snapshot)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Segment delimiter
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Maximum chunk length in characters; 0 or less disables chunking
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logging profile (development, production, test)
    #[arg(long)]
    pub log_profile: Option<Profile>,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file = match &args.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let (config, profile) = resolve(
        FlagSettings {
            delimiter: args.delimiter,
            split_limit: args.limit,
            log_profile: args.log_profile,
        },
        file,
    )?;
    logging_facility::init(profile);

    let old = load_snapshot(&args.old)?;
    let new = load_snapshot(&args.new)?;

    let report = build_report(&old, &new, &config)?;

    let output = args
        .output
        .unwrap_or_else(|| suggested_output_path(&args.old, &args.new));
    write_report_json(&output, &report)?;
    tracing::info!(run_id = %report.run_id, path = %output.display(), "report written");

    print!("{}", render_human_summary(&report));
    println!();
    println!("Report written to {}", output.display());
    Ok(())
}
