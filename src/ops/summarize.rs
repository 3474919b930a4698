//! Physician summary generation.

use crate::ai::prompts::summary_prompt;
use crate::ai::Summarizer;
use crate::constants::MIN_ENTRIES_FOR_SUMMARY;
use crate::errors::{AppError, AppResult};
use crate::session::SessionState;
use tracing::{info, warn};

/// Generates a summary of every entry in the session.
///
/// # Flow
///
/// 1. Check there are enough entries to describe a trend
/// 2. Claim the session's summary slot
/// 3. Build the prompt from the entries in submission order
/// 4. Ask the summarizer
/// 5. Store the result as the session's latest summary
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than two entries have been logged
/// - Another summary request is still running for this session
/// - The summarizer fails; the previous summary is kept in that case
pub async fn generate_summary<S: Summarizer>(
    session: &mut SessionState,
    summarizer: &S,
) -> AppResult<String> {
    let found = session.entries.len();
    if found < MIN_ENTRIES_FOR_SUMMARY {
        return Err(AppError::InsufficientEntries {
            required: MIN_ENTRIES_FOR_SUMMARY,
            found,
        });
    }

    let _guard = session.begin_summary()?;
    info!("Generating summary for {} entries", found);

    let messages = summary_prompt(session.entries.all());
    let summary = match summarizer.complete(&messages).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Summary generation failed: {}", e);
            return Err(e);
        }
    };

    info!("Generated summary ({} chars)", summary.len());
    session.last_summary = Some(summary.clone());
    Ok(summary)
}
