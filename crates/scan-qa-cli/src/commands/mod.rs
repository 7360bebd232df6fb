//! CLI command definitions and handlers.

pub mod check;
pub mod presets;

use clap::{Parser, Subcommand};

/// Scan QA - Capture quality validation for scanning pipelines
#[derive(Parser)]
#[command(name = "scan-qa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared check arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub check: check::CheckArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate images against quality thresholds
    Check(check::CheckArgs),
    /// List the named threshold presets
    Presets(presets::PresetsArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every image passed validation.
    Success,
    /// At least one image failed validation.
    IssuesFound,
    /// Execution error.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::IssuesFound => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
