/*!
# SymptomSleuth

SymptomSleuth is a personal symptom journal. You log dated entries with a
description of how you feel, a mood rating and, in Athlete Mode, the body
parts that hurt. The tool keeps a daily logging streak and, on request, asks
a language model for a physician-oriented summary of your entries that you
can export as a PDF for your doctor.

Entries live only for the current session; nothing is written to disk except
the exported report.

## Architecture

- `journal_core`: Entries, the append-only entry log and the streak calculation
- `session`: Per-session state and the single in-flight summary guard
- `ai`: Summary prompt building and the chat completions client
- `report`: PDF rendering of summaries
- `ops`: Session operations tying the core to its collaborators
- `cli`: Start-up flags and the interactive shell
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure

## Usage Example

```rust
use symptom_sleuth::journal_core::{EntrySubmission, Mood};
use symptom_sleuth::{ops, SessionState};
use chrono::NaiveDate;
use std::collections::BTreeSet;

fn main() -> symptom_sleuth::AppResult<()> {
    let mut session = SessionState::new();
    let submission = EntrySubmission {
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        symptom_text: "Dull headache in the afternoon".to_string(),
        mood: Mood::Good,
        athlete_mode: false,
        pain_areas: BTreeSet::new(),
    };

    let streak = ops::log_entry(&mut session, &submission)?;
    assert_eq!(streak.streak_count, 1);
    Ok(())
}
```
*/

/// Summary prompts and the chat completions client
pub mod ai;
/// Command-line flags and the interactive shell
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Pure journal logic: entries, entry log, streak
pub mod journal_core;
/// Session operations
pub mod ops;
/// PDF report rendering
pub mod report;
/// Per-session state
pub mod session;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use session::SessionState;
