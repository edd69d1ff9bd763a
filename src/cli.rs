use std::path::PathBuf;

use crate::config::DeviceKind;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "lightrun",
    version,
    about = "Repeated Lighthouse audits with aggregated scores, trend and comparison reports",
    long_about = None
)]
pub struct Cli {
    /// URL to audit.
    #[arg(long, default_value = "https://example.com")]
    pub url: String,

    /// Number of sequential audit runs.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Device profile to emulate.
    #[arg(long, value_enum, default_value_t = DeviceKind::Desktop)]
    pub device: DeviceKind,

    /// Second URL to audit and compare against the primary one.
    #[arg(long, value_name = "URL")]
    pub compare_url: Option<String>,

    /// Persist the aggregated result to the history directory.
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub save_history: bool,

    /// Category to audit (repeatable; defaults to all four).
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// CPU slowdown multiplier applied during runs.
    #[arg(long, default_value_t = 4.0)]
    pub cpu_slowdown: f64,

    /// Download throughput in kbps.
    #[arg(long, default_value_t = 1600.0)]
    pub download_kbps: f64,

    /// Upload throughput in kbps.
    #[arg(long, default_value_t = 750.0)]
    pub upload_kbps: f64,

    /// Simulated round-trip time in milliseconds.
    #[arg(long, default_value_t = 150.0)]
    pub rtt_ms: f64,

    /// Directory reports, history and logs are written to.
    #[arg(long, default_value = "lightrun_reports")]
    pub output_dir: PathBuf,

    /// JSON config file overlaid on top of the flags (file values win).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable the progress bar.
    #[arg(long, action = ArgAction::SetTrue)]
    pub quiet: bool,
}
