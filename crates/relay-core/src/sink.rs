//! Output sink for channel delivery lines.

use parking_lot::Mutex;
use std::sync::Arc;

/// Line-oriented text output.
pub trait OutputSink: Send + Sync {
    /// Write one line of text.
    fn log(&self, text: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn log(&self, text: &str) {
        println!("{}", text);
    }
}

/// Collects lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl OutputSink for MemorySink {
    fn log(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}
