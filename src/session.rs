//! Per-session journal state.
//!
//! Everything a user builds up during one run of the tool lives in a
//! [`SessionState`]: the entry log, the streak, and the last generated
//! summary. Nothing is persisted; dropping the session discards it. Separate
//! sessions never share state.

use crate::errors::{AppError, AppResult};
use crate::journal_core::{EntryStore, StreakState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// State for one journaling session.
#[derive(Debug)]
pub struct SessionState {
    id: Uuid,
    pub entries: EntryStore,
    pub streak: StreakState,
    pub last_summary: Option<String>,
    summary_in_flight: Arc<AtomicBool>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Starts an empty session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            entries: EntryStore::new(),
            streak: StreakState::default(),
            last_summary: None,
            summary_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Identifier used to correlate this session's log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether a summary request is currently outstanding.
    pub fn is_summarizing(&self) -> bool {
        self.summary_in_flight.load(Ordering::Acquire)
    }

    /// Claims the session's single summary slot.
    ///
    /// The slot is released when the returned guard is dropped, whether the
    /// request succeeded or failed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::SummaryInProgress` if another request holds the slot.
    pub fn begin_summary(&self) -> AppResult<SummaryGuard> {
        self.summary_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::SummaryInProgress)?;
        Ok(SummaryGuard {
            flag: Arc::clone(&self.summary_in_flight),
        })
    }
}

/// Holds the summary slot of a session until dropped.
#[derive(Debug)]
pub struct SummaryGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for SummaryGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
