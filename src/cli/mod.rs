//! Command-line interface: start-up flags and the interactive journaling shell.

pub mod shell;

use crate::config::LogFormat;
use crate::constants::APP_NAME;
use clap::Parser;

pub use shell::{Shell, ShellCommand};

/// Track your symptoms, keep a logging streak, and share an AI summary with your doctor
#[derive(Parser, Debug)]
#[command(name = APP_NAME, author, version, long_about = None)]
pub struct CliArgs {
    /// Chat model used for summaries (overrides SYMPTOM_SLEUTH_MODEL)
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API (overrides SYMPTOM_SLEUTH_API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Directory PDF reports are written to (overrides SYMPTOM_SLEUTH_EXPORT_DIR)
    #[arg(long)]
    pub export_dir: Option<String>,

    /// Log output format (overrides SYMPTOM_SLEUTH_LOG_FORMAT)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Print verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
