//! History module - completed runs of the current session
//!
//! The log lives in memory only and is lost when the program exits.

use chrono::{DateTime, Local};

use crate::types::{Alphabet, BoardSize, ElapsedTime};

/// Summary of one completed game. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    finished_at: DateTime<Local>,
    alphabet: Alphabet,
    size: BoardSize,
    time: ElapsedTime,
}

impl HistoryEntry {
    pub fn new(
        finished_at: DateTime<Local>,
        alphabet: Alphabet,
        size: BoardSize,
        time: ElapsedTime,
    ) -> Self {
        Self {
            finished_at,
            alphabet,
            size,
            time,
        }
    }

    pub fn finished_at(&self) -> DateTime<Local> {
        self.finished_at
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn time(&self) -> ElapsedTime {
        self.time
    }

    /// `DD.MM.YYYY, HH:MM`
    pub fn date_label(&self) -> String {
        self.finished_at.format("%d.%m.%Y, %H:%M").to_string()
    }

    /// `N×N`
    pub fn dimensions_label(&self) -> String {
        self.size.to_string()
    }

    /// `MM:SS`
    pub fn time_label(&self) -> String {
        self.time.to_string()
    }
}

/// Append-only list of completed games, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Fastest completion for a given alphabet and size, if any.
    pub fn best_time(&self, alphabet: Alphabet, size: BoardSize) -> Option<ElapsedTime> {
        self.entries
            .iter()
            .filter(|e| e.alphabet == alphabet && e.size == size)
            .map(|e| e.time)
            .min()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
