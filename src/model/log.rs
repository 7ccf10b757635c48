use serde::{Deserialize, Serialize};

/// One human-readable message produced during a simulated turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub region: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(region: &str, message: String) -> Self {
        Self {
            region: region.to_string(),
            message,
        }
    }
}

/// Append-only log of simulation messages accumulated across turns.
/// Never trimmed automatically; the owner decides when to clear it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
