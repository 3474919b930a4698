//! Append-only, session-scoped log of journal entries.

use super::entry::Entry;

/// Entries in the order they were submitted.
///
/// Submission order is not date order: a user may backdate an entry.
/// Nothing is ever edited or removed once appended.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the end of the log.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// All entries, oldest submission first.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// All entries, most recent submission first.
    pub fn display_order(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
