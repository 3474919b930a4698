/*!
# SymptomSleuth - A Symptom Journal for Sharing with Your Doctor

This file contains the main application flow: it sets up logging, loads the
configuration, and hands one journaling session to the interactive shell.

## Usage

```text
symptom-sleuth [OPTIONS]

Options:
      --model <MODEL>            Chat model used for summaries
      --api-base <API_BASE>      Base URL of the OpenAI-compatible API
      --export-dir <EXPORT_DIR>  Directory PDF reports are written to
      --log-format <LOG_FORMAT>  Log output format [possible values: text, json]
  -v, --verbose                  Print verbose output
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `SYMPTOM_SLEUTH_API_KEY` or `OPENAI_API_KEY`: API key for summaries
- `SYMPTOM_SLEUTH_API_BASE`: API base URL (defaults to "https://api.openai.com/v1")
- `SYMPTOM_SLEUTH_MODEL`: Chat model (defaults to "gpt-3.5-turbo")
- `SYMPTOM_SLEUTH_EXPORT_DIR`: Report directory (defaults to ".")
- `SYMPTOM_SLEUTH_LOG_FORMAT`: "text" or "json"
*/

use chrono::Local;
use clap::Parser;
use std::io;
use symptom_sleuth::ai::OpenAiClient;
use symptom_sleuth::cli::{CliArgs, Shell};
use symptom_sleuth::config::{Config, LogFormat};
use symptom_sleuth::constants::{
    DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use symptom_sleuth::errors::AppResult;
use symptom_sleuth::SessionState;
use tracing::{debug, error, info, info_span, Instrument};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so the shell owns stdout. `RUST_LOG` wins over the
/// default level; `--verbose` raises the default to `debug`.
fn init_tracing(format: LogFormat, verbose: bool) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// The main entry point for the SymptomSleuth application.
///
/// 1. Parses command-line arguments
/// 2. Loads, overrides and validates configuration
/// 3. Initializes logging
/// 4. Runs one interactive session
///
/// # Errors
///
/// Only configuration and terminal I/O failures end the program with an
/// error; everything that goes wrong inside the session is reported to the
/// user and the session continues.
#[tokio::main]
async fn main() -> AppResult<()> {
    // Obtain the current date once at the beginning
    let today = Local::now().date_naive();

    let args = CliArgs::parse();
    let config = Config::load()?.apply_cli(&args)?;
    config.validate()?;

    init_tracing(config.log_format, args.verbose);
    debug!("CLI arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    let mut session = SessionState::new();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        session_id = %session.id()
    );

    async {
        info!("Starting session");
        if config.api_key.is_none() {
            info!("No API key configured; summaries are unavailable this session");
        }

        let client = OpenAiClient::new(
            config.api_base.clone(),
            config.api_key.clone(),
            config.model.clone(),
        );
        let stdin = io::stdin();
        let mut shell = Shell::new(stdin.lock(), io::stdout(), today, config.export_dir.clone());

        let result = shell.run(&mut session, &client).await;
        match &result {
            Ok(()) => info!(entries = session.entries.len(), "Session ended"),
            Err(e) => error!("Session aborted: {}", e),
        }
        result
    }
    .instrument(span)
    .await
}
