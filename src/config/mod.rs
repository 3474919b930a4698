//! Configuration management for the SymptomSleuth application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. Command-line flags can
//! override the loaded values before validation.
//!
//! # Environment Variables
//!
//! - `SYMPTOM_SLEUTH_API_KEY`: API key for the summarization service
//! - `OPENAI_API_KEY`: Fallback API key if the dedicated one is not set
//! - `SYMPTOM_SLEUTH_API_BASE`: Base URL of the chat completions API
//! - `SYMPTOM_SLEUTH_MODEL`: Chat model used for summaries (defaults to "gpt-3.5-turbo")
//! - `SYMPTOM_SLEUTH_EXPORT_DIR`: Directory reports are written to (defaults to ".")
//! - `SYMPTOM_SLEUTH_LOG_FORMAT`: "text" or "json"

use crate::cli::CliArgs;
use crate::constants::{
    DEFAULT_API_BASE, DEFAULT_CHAT_MODEL, ENV_VAR_API_BASE, ENV_VAR_API_KEY, ENV_VAR_EXPORT_DIR,
    ENV_VAR_LOG_FORMAT, ENV_VAR_MODEL, ENV_VAR_OPENAI_API_KEY, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use std::env;
use std::fmt;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Output format of the structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Invalid log format '{}'. Expected '{}' or '{}'",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            ))),
        }
    }
}

/// Configuration for the SymptomSleuth application.
///
/// # Examples
///
/// ```
/// use symptom_sleuth::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     export_dir: PathBuf::from("/tmp/reports"),
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// API key for the summarization service.
    ///
    /// Optional at start-up; a summary request without it fails with a
    /// message telling the user how to set it.
    pub api_key: Option<Zeroizing<String>>,

    /// Base URL of the OpenAI-compatible API.
    pub api_base: String,

    /// Chat model used for summaries.
    pub model: String,

    /// Directory where exported reports are written.
    pub export_dir: PathBuf,

    /// Log output format.
    pub log_format: LogFormat,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("export_dir", &"[REDACTED_PATH]")
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            export_dir: PathBuf::from("."),
            log_format: LogFormat::Text,
        }
    }
}

/// Reads an environment variable, treating blank values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Expands `~` and environment variable references in a path.
fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The export directory path expansion fails
    /// - The log format is neither "text" nor "json"
    pub fn load() -> AppResult<Self> {
        let defaults = Config::default();

        let api_key = non_empty_var(ENV_VAR_API_KEY)
            .or_else(|| non_empty_var(ENV_VAR_OPENAI_API_KEY))
            .map(Zeroizing::new);

        let api_base = non_empty_var(ENV_VAR_API_BASE).unwrap_or(defaults.api_base);
        let model = non_empty_var(ENV_VAR_MODEL).unwrap_or(defaults.model);

        let export_dir = match non_empty_var(ENV_VAR_EXPORT_DIR) {
            Some(raw) => expand_path(&raw)?,
            None => defaults.export_dir,
        };

        let log_format = match non_empty_var(ENV_VAR_LOG_FORMAT) {
            Some(raw) => LogFormat::parse(&raw)?,
            None => defaults.log_format,
        };

        Ok(Config {
            api_key,
            api_base,
            model,
            export_dir,
            log_format,
        })
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn apply_cli(mut self, args: &CliArgs) -> AppResult<Self> {
        if let Some(model) = &args.model {
            self.model = model.clone();
        }
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        if let Some(dir) = &args.export_dir {
            self.export_dir = expand_path(dir)?;
        }
        if let Some(format) = args.log_format {
            self.log_format = format;
        }
        Ok(self)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The model name is empty or contains whitespace
    /// - The API base URL is not an http(s) URL
    /// - The export directory path is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model name is empty".to_string()));
        }
        if self.model.chars().any(char::is_whitespace) {
            return Err(AppError::Config(format!(
                "Model name '{}' cannot contain whitespace",
                self.model
            )));
        }

        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API base URL '{}' must start with http:// or https://",
                self.api_base
            )));
        }

        if self.export_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Export directory path is empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        ENV_VAR_API_KEY,
        ENV_VAR_OPENAI_API_KEY,
        ENV_VAR_API_BASE,
        ENV_VAR_MODEL,
        ENV_VAR_EXPORT_DIR,
        ENV_VAR_LOG_FORMAT,
    ];

    /// Runs `f` with only the given variables set, restoring the originals after.
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let names: Vec<&str> = VARS
            .iter()
            .copied()
            .chain(vars.iter().map(|(name, _)| *name))
            .collect();
        let originals: Vec<_> = names.iter().map(|name| (*name, env::var(name).ok())).collect();
        for name in &names {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }

        let result = f();

        for (name, value) in originals {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
        result
    }

    #[test]
    fn test_debug_impl_redacts_sensitive_info() {
        let config = Config {
            api_key: Some(Zeroizing::new("sk-secret-123".to_string())),
            export_dir: PathBuf::from("/home/username/private/reports"),
            ..Config::default()
        };

        let debug_output = format!("{:?}", config);
        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(debug_output.contains("[REDACTED_PATH]"));
        assert!(!debug_output.contains("sk-secret-123"));
        assert!(!debug_output.contains("/home/username/private/reports"));
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        let config = with_env(&[], Config::load).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    #[serial]
    fn test_dedicated_api_key_takes_precedence() {
        let config = with_env(
            &[(ENV_VAR_OPENAI_API_KEY, "sk-openai"), (ENV_VAR_API_KEY, "sk-sleuth")],
            Config::load,
        )
        .unwrap();
        assert_eq!(config.api_key.as_deref().map(String::as_str), Some("sk-sleuth"));

        let config = with_env(&[(ENV_VAR_OPENAI_API_KEY, "sk-openai")], Config::load).unwrap();
        assert_eq!(config.api_key.as_deref().map(String::as_str), Some("sk-openai"));

        let config = with_env(&[(ENV_VAR_API_KEY, "   ")], Config::load).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_load_expands_export_dir() {
        let config = with_env(
            &[
                ("SYMPTOM_SLEUTH_TEST_ROOT", "/srv/journal"),
                (ENV_VAR_EXPORT_DIR, "$SYMPTOM_SLEUTH_TEST_ROOT/reports"),
            ],
            Config::load,
        )
        .unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/srv/journal/reports"));
    }

    #[test]
    #[serial]
    fn test_load_rejects_unknown_log_format() {
        let result = with_env(&[(ENV_VAR_LOG_FORMAT, "xml")], Config::load);
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("Invalid log format 'xml'")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        let config = with_env(&[(ENV_VAR_LOG_FORMAT, "JSON")], Config::load).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_overrides_loaded_values() {
        let args = CliArgs::parse_from([
            "symptom-sleuth",
            "--model",
            "gpt-4o-mini",
            "--api-base",
            "http://localhost:8080/v1",
            "--export-dir",
            "/tmp/out",
            "--log-format",
            "json",
        ]);
        let config = Config::default().apply_cli(&args).unwrap();

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_model_name() {
        for model in ["", "gpt 4"] {
            let config = Config {
                model: model.to_string(),
                ..Config::default()
            };
            assert!(matches!(config.validate(), Err(AppError::Config(_))));
        }
    }

    #[test]
    fn test_validate_api_base_scheme() {
        let config = Config {
            api_base: "ftp://example.com".to_string(),
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("http://")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_export_dir() {
        let config = Config {
            export_dir: PathBuf::new(),
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("Export directory path is empty")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
