//! Command-line interface

use clap::{Parser, ValueEnum};
use csv_pipeline::ValidationPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "agrisense-convert",
    version,
    about = "Prepare raw field sensor CSV files for bulk import"
)]
pub struct Cli {
    /// Raw sensor readings CSV
    pub input: PathBuf,

    /// Destination for the cleaned table
    pub output: PathBuf,

    /// What to do when a row fails validation
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Append to an existing output file instead of overwriting it
    #[arg(long, default_value_t = false)]
    pub append: bool,

    /// Cross-check the accepted row count against this value
    #[arg(long)]
    pub expect_rows: Option<usize>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output the conversion report as machine-readable JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug-level logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// Skip invalid rows and record diagnostics
    Skip,
    /// Stop at the first invalid row
    Abort,
}

impl From<PolicyArg> for ValidationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Skip => ValidationPolicy::Skip,
            PolicyArg::Abort => ValidationPolicy::Abort,
        }
    }
}
