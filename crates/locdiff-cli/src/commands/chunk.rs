//! Chunk plan inspection command

use crate::settings::{resolve, FileSettings, FlagSettings};
use clap::Args;
use locdiff_core::errors::LocDiffError;
use locdiff_core::logging_facility::{self, Profile};
use locdiff_core::text::chunk::chunk_text;
use locdiff_store::load_snapshot;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Snapshot (SQLite database or .json)
    pub path: PathBuf,

    /// Record key to inspect
    #[arg(long)]
    pub key: String,

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

pub fn execute(args: ChunkArgs) -> Result<(), Box<dyn std::error::Error>> {
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

    let snapshot = load_snapshot(&args.path)?;
    let text = snapshot
        .get(&args.key)
        .ok_or_else(|| LocDiffError::KeyNotFound {
            key: args.key.clone(),
        })?;

    let plan = chunk_text(text, config.delimiter(), config.split_limit());
    println!(
        "key={} chars={} chunks={}",
        args.key,
        text.chars().count(),
        plan.len()
    );
    for (split_part, chunk) in plan.split_parts().into_iter().zip(plan.chunks()) {
        println!(
            "split_part={} chars={} bytes={}",
            split_part,
            chunk.chars().count(),
            chunk.len()
        );
    }
    Ok(())
}
