use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::Level;

/// Default capacity of the in-app log view
pub const LOG_BUFFER_CAPACITY: usize = 5000;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Slice of the buffer visible on screen, oldest entry first
#[derive(Debug, Clone)]
pub struct LogWindow {
    /// Index of the first visible entry
    pub start: usize,
    /// One past the last visible entry
    pub end: usize,
    pub total: usize,
    pub entries: Vec<LogEntry>,
}

/// Thread-safe circular buffer for log entries.
///
/// A poisoned lock only means another thread panicked mid-push; the entries
/// are still readable, so the guard is recovered rather than propagated.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    max_entries: usize,
}

impl LogBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(max_entries))),
            max_entries,
        }
    }

    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `height` entries ending `offset` entries before the newest
    pub fn window(&self, offset: usize, height: usize) -> LogWindow {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let total = entries.len();
        let end = total.saturating_sub(offset);
        let start = end.saturating_sub(height);

        LogWindow {
            start,
            end,
            total,
            entries: entries.range(start..end).cloned().collect(),
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(LOG_BUFFER_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: chrono::Local::now(),
            level: Level::INFO,
            target: "mealmind".to_string(),
            message: message.to_string(),
        }
    }

    fn messages(window: &LogWindow) -> Vec<&str> {
        window.entries.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let buffer = LogBuffer::new(2);
        buffer.push(entry("one"));
        buffer.push(entry("two"));
        buffer.push(entry("three"));

        assert_eq!(buffer.len(), 2);
        assert_eq!(messages(&buffer.window(0, 10)), vec!["two", "three"]);
    }

    #[test]
    fn test_window_counts_back_from_newest() {
        let buffer = LogBuffer::new(10);
        for i in 0..6 {
            buffer.push(entry(&i.to_string()));
        }

        let window = buffer.window(0, 3);
        assert_eq!((window.start, window.end, window.total), (3, 6, 6));
        assert_eq!(messages(&window), vec!["3", "4", "5"]);

        let window = buffer.window(2, 3);
        assert_eq!(messages(&window), vec!["1", "2", "3"]);

        let window = buffer.window(5, 3);
        assert_eq!(messages(&window), vec!["0"]);
    }

    #[test]
    fn test_window_of_empty_buffer() {
        let buffer = LogBuffer::default();
        let window = buffer.window(0, 20);

        assert!(buffer.is_empty());
        assert!(window.entries.is_empty());
        assert_eq!(window.total, 0);
    }
}
