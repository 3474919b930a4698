//! Record a journal entry and advance the streak.

use crate::errors::AppResult;
use crate::journal_core::{streak, Entry, EntrySubmission, StreakState};
use crate::session::SessionState;
use tracing::{debug, info};

/// Validates a submission, updates the streak and appends the entry.
///
/// The entry is validated before anything changes, so a rejected
/// submission leaves both the log and the streak untouched.
///
/// # Returns
///
/// The streak after this submission.
///
/// # Errors
///
/// Returns `AppError::Validation` if the symptom text is empty after
/// trimming.
pub fn log_entry(session: &mut SessionState, submission: &EntrySubmission) -> AppResult<StreakState> {
    let entry = Entry::from_submission(submission)?;

    session.streak = streak::record(entry.date(), session.streak);
    debug!(
        "Streak updated to {} (last log {:?})",
        session.streak.streak_count, session.streak.last_log_date
    );

    session.entries.append(entry);
    info!(
        "Logged entry {} for {}",
        session.entries.len(),
        submission.date
    );

    Ok(session.streak)
}
