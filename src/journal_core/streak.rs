//! Daily logging streak.
//!
//! The streak counts consecutive calendar days ending at the date of the most
//! recent submission. It is recomputed from the previous state and the new
//! date on every accepted submission.

use chrono::NaiveDate;

/// Streak bookkeeping carried across submissions in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakState {
    /// Date of the most recently submitted entry, by submission order.
    pub last_log_date: Option<NaiveDate>,
    pub streak_count: u32,
}

/// Computes the streak after a submission dated `new_date`.
///
/// - first submission: the streak starts at 1
/// - exactly one day after the last submission: the streak grows by one
/// - more than one day after: the streak restarts at 1
/// - same day or earlier: the count is left as it is
///
/// In every case `last_log_date` becomes `new_date`, so a backdated entry
/// moves the reference point backwards.
///
/// # Examples
///
/// ```
/// use symptom_sleuth::journal_core::streak::{record, StreakState};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let state = record(day(1), StreakState::default());
/// let state = record(day(2), state);
/// assert_eq!(state.streak_count, 2);
///
/// let state = record(day(2), state);
/// assert_eq!(state.streak_count, 2);
/// ```
pub fn record(new_date: NaiveDate, state: StreakState) -> StreakState {
    let streak_count = match state.last_log_date {
        None => 1,
        Some(last) => match (new_date - last).num_days() {
            1 => state.streak_count + 1,
            diff if diff > 1 => 1,
            _ => state.streak_count,
        },
    };

    StreakState {
        last_log_date: Some(new_date),
        streak_count,
    }
}
