//! High-level operations for a journaling session.
//!
//! This module provides the user-facing operations that tie the journal core
//! to its collaborators: logging an entry and advancing the streak, asking
//! the summarization service for a physician summary, and exporting that
//! summary as a PDF report.

pub mod export;
pub mod log_entry;
pub mod summarize;

// Re-export commonly used functions
pub use export::{export_report, report_path};
pub use log_entry::log_entry;
pub use summarize::generate_summary;
