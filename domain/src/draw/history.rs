//! Draw history log

use chrono::{DateTime, Local};

/// One completed draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub name: String,
    pub drawn_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(name: impl Into<String>, drawn_at: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            drawn_at,
        }
    }

    /// `"Ada - 09:41:07"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.drawn_at.format("%H:%M:%S"))
    }
}

/// Append-only log of draws since the roster was last initialized.
#[derive(Debug, Clone, Default)]
pub struct DrawHistory {
    entries: Vec<HistoryEntry>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries newest first, the way they are displayed.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 9, 2, h, m, s).unwrap()
    }

    #[test]
    fn test_newest_first() {
        let mut history = DrawHistory::new();
        history.record(HistoryEntry::new("Ann", at(9, 0, 0)));
        history.record(HistoryEntry::new("Ben", at(9, 5, 0)));

        let names: Vec<_> = history.newest_first().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Ann"]);
    }

    #[test]
    fn test_label_format() {
        let entry = HistoryEntry::new("Ada", at(9, 41, 7));
        assert_eq!(entry.label(), "Ada - 09:41:07");
    }

    #[test]
    fn test_clear() {
        let mut history = DrawHistory::new();
        history.record(HistoryEntry::new("Ann", at(10, 0, 0)));
        history.clear();
        assert!(history.is_empty());
    }
}
