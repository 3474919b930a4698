//! Error handling utilities for the SymptomSleuth application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! None of these errors ends a journaling session: the interactive shell turns
//! each of them into a message and keeps going.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents reasons a submitted journal entry is rejected.
///
/// A rejected submission never touches the entry log or the streak.
///
/// # Examples
///
/// ```
/// use symptom_sleuth::errors::ValidationError;
///
/// let error = ValidationError::UnknownPainArea("Tail".to_string());
/// assert!(format!("{}", error).contains("Tail"));
/// assert!(format!("{}", error).contains("Knee"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The symptom description is empty or only whitespace.
    #[error("Symptom description is empty. Describe how you feel before logging an entry.")]
    EmptySymptoms,

    /// The date could not be parsed.
    #[error("Invalid date '{0}'. Use YYYY-MM-DD or YYYYMMDD.")]
    InvalidDate(String),

    /// The mood is not one of the four known levels.
    #[error("Unknown mood '{0}'. Choose 1-4, a name (low, neutral, good, great) or 😞 😐 😊 😄.")]
    UnknownMood(String),

    /// The body region is not part of the pain vocabulary.
    #[error("Unknown body part '{0}'. Choose from: Head, Neck, Shoulder, Back, Elbow, Wrist, Hip, Knee, Ankle, Foot.")]
    UnknownPainArea(String),
}

/// Represents failures of the summarization service.
///
/// Provider messages are kept verbatim so the user sees exactly what the
/// service reported.
///
/// # Examples
///
/// ```
/// use symptom_sleuth::errors::AIError;
///
/// let error = AIError::Api { status: 429, message: "Rate limit reached".to_string() };
/// assert!(format!("{}", error).contains("429"));
/// assert!(format!("{}", error).contains("Rate limit reached"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// No API key was configured.
    #[error("No API key configured. Set SYMPTOM_SLEUTH_API_KEY or OPENAI_API_KEY and start a new session.")]
    MissingApiKey,

    /// The request never produced an HTTP response.
    #[error("Summarization service unreachable: {0}. Check your network connection and API base URL.")]
    RequestFailed(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Summarization service returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Provider message, verbatim
        message: String,
    },

    /// The response body did not match the chat completions format.
    #[error("Invalid response from summarization service: {0}")]
    InvalidResponse(String),

    /// The service answered without any completion text.
    #[error("Summarization service returned an empty summary")]
    EmptyCompletion,
}

/// Represents failures while producing the PDF report.
///
/// # Examples
///
/// ```
/// use symptom_sleuth::errors::ExportError;
///
/// let error = ExportError::NoSummary;
/// assert!(format!("{}", error).contains("summary"));
/// ```
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was requested before any summary was generated.
    #[error("No summary to export yet. Run 'summary' first.")]
    NoSummary,

    /// The PDF document could not be rendered.
    #[error("Failed to render PDF report: {0}")]
    Render(String),

    /// The rendered report could not be written.
    #[error("Failed to write report to {path}: {source}. Check that the directory exists and is writable.")]
    Write {
        /// Destination of the report
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the SymptomSleuth application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories.
///
/// # Examples
///
/// ```
/// use symptom_sleuth::errors::AppError;
///
/// let error = AppError::Config("Model name is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Model name is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from the terminal or filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A submitted entry was rejected.
    #[error("Entry not logged: {0}")]
    Validation(#[from] ValidationError),

    /// The summarization service failed.
    #[error("AI error: {0}")]
    AI(#[from] AIError),

    /// The report could not be exported.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Not enough entries have been logged to describe a trend.
    #[error("Log at least {required} entries before generating a summary (you have {found}).")]
    InsufficientEntries {
        /// Minimum number of entries
        required: usize,
        /// Entries logged so far
        found: usize,
    },

    /// Another summary request for this session has not finished yet.
    #[error("A summary is already being generated. Wait for it to finish.")]
    SummaryInProgress,
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
