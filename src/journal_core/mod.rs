//! Core journal functionality without I/O operations.
//!
//! This module contains the pure logic of the symptom journal: the entry
//! model with its closed mood and pain-area vocabularies, the append-only
//! entry log, and the streak calculation. Nothing here touches the terminal,
//! the network or the filesystem.

pub mod entry;
pub mod store;
pub mod streak;

pub use entry::{parse_entry_date, Entry, EntrySubmission, Mood, PainArea};
pub use store::EntryStore;
pub use streak::StreakState;
