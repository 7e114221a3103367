//! Reporting capability handed to the normalizer, the reconciler and the
//! sync pipeline. Nothing in `core` touches a global logger directly.

use std::cell::RefCell;

pub trait Reporter {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Forwards everything to `tracing` (the subscriber is installed in `main`).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Keeps every message in memory. Handy in tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(_, msg)| msg.contains(needle))
    }

    fn push(&self, level: Level, msg: &str) {
        self.entries.borrow_mut().push((level, msg.to_string()));
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }
}
