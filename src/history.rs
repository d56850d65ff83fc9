use chrono::{DateTime, Local, SubsecRound};

use crate::timer::SessionKind;

/// One finished session. Fields are private so an entry cannot change once
/// it is in the log.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    label: SessionKind,
    completed_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn label(&self) -> SessionKind {
        self.label
    }

    pub fn completed_at(&self) -> DateTime<Local> {
        self.completed_at
    }
}

/// Append-only log of finished sessions, oldest first
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: SessionKind, completed_at: DateTime<Local>) {
        self.entries.push(HistoryEntry {
            label,
            completed_at: completed_at.trunc_subsecs(0),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
