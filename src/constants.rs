//! Constants used throughout the application.
//!
//! This module contains all constants used in SymptomSleuth, organized into
//! logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "symptom-sleuth";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Track your symptoms. Understand your health.";
/// Title shown in the interactive shell banner and at the top of reports.
pub const APP_TITLE: &str = "SymptomSleuth";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "symptom-sleuth";
/// Name for the root tracing span covering one journaling session.
pub const TRACING_ROOT_SPAN_NAME: &str = "journal_session";

// Configuration Keys & Environment Variables
/// Environment variable holding the summarization API key.
pub const ENV_VAR_API_KEY: &str = "SYMPTOM_SLEUTH_API_KEY";
/// Conventional OpenAI key variable, used when the dedicated one is unset.
pub const ENV_VAR_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the chat completions base URL.
pub const ENV_VAR_API_BASE: &str = "SYMPTOM_SLEUTH_API_BASE";
/// Environment variable selecting the chat model.
pub const ENV_VAR_MODEL: &str = "SYMPTOM_SLEUTH_MODEL";
/// Environment variable for the directory reports are exported to.
pub const ENV_VAR_EXPORT_DIR: &str = "SYMPTOM_SLEUTH_EXPORT_DIR";
/// Environment variable selecting the log output format.
pub const ENV_VAR_LOG_FORMAT: &str = "SYMPTOM_SLEUTH_LOG_FORMAT";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Summarization Service
/// Default base URL of the OpenAI-compatible API.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// Default chat model for summaries.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
/// Minimum number of entries before a trend summary is worth requesting.
pub const MIN_ENTRIES_FOR_SUMMARY: usize = 2;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Human-readable date format used when displaying entries.
pub const DISPLAY_DATE_FORMAT: &str = "%A, %B %d";

// Report Export
/// File name offered for the exported report.
pub const REPORT_FILE_NAME: &str = "SymptomSleuth_Report.pdf";
/// Title line that opens every report.
pub const REPORT_TITLE: &str = "SymptomSleuth Report";
/// A4 page width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 page height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Left margin in millimetres.
pub const PAGE_MARGIN_LEFT_MM: f32 = 10.0;
/// Baseline of the first line on a page, in millimetres from the bottom.
pub const PAGE_TOP_MM: f32 = 280.0;
/// Lowest baseline allowed before a new page is started.
pub const PAGE_BOTTOM_MM: f32 = 15.0;
/// Body font size in points.
pub const REPORT_FONT_SIZE: f32 = 12.0;
/// Distance between consecutive baselines in millimetres.
pub const REPORT_LINE_HEIGHT_MM: f32 = 7.0;
/// Widest a line of body text may run, in millimetres (page width less both margins).
pub const REPORT_TEXT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * PAGE_MARGIN_LEFT_MM;
