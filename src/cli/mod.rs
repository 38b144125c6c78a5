//! CLI definitions and entry point.

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

/// Summarize Criterion results into a Markdown report and archive it
#[derive(Parser, Debug, Default)]
#[command(name = "bench-summary", author, version, about, long_about = None)]
pub struct Cli {
    /// Criterion output directory [default: target/criterion]
    #[arg(long)]
    pub criterion_dir: Option<PathBuf>,

    /// Directory archives are written to [default: benches/archive]
    #[arg(long)]
    pub archive_dir: Option<PathBuf>,

    /// Print the report without writing an archive
    #[arg(long)]
    pub no_archive: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,
}
