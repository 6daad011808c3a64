use serde::{Deserialize, Serialize};

/// Identifier for a log entry. Assigned from a monotonic per-session
/// counter, so id order equals log order. Identity is for display keying
/// only; content equality is never derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u64);

/// One line of the journey log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: EntryId,
    pub text: String,
}

impl LogEntry {
    pub fn new(id: EntryId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_ids_order_like_the_log() {
        let a = LogEntry::new(EntryId(0), "first light");
        let b = LogEntry::new(EntryId(1), "high sun");
        assert!(a.id < b.id);
        assert_eq!(a.text, "first light");
    }
}
