//! Self-watch: live status reporting for bound resources (v0.1)
//!
//! A bound value may expose a [`SelfWatch`] monitor that renders its live
//! status (bytes written, messages queued, ...). The [`WatchRegistry`]
//! collects one entry per bind so the host can render an aggregate report at
//! any time, including while binds are still in flight.
//!
//! - `SelfWatch`: the optional self-reporting capability
//! - `Watchable`: compile-time capability check ("does this type watch itself?")
//! - `WatchRegistry`: thread-safe, append-only, insertion-ordered
//! - `encode_status`: folds an aggregate report onto one line for nesting

use std::sync::{Arc, Mutex};

/// Optional self-reporting capability of a bound value
///
/// Infallible by signature: a monitor with nothing useful to say returns
/// placeholder text rather than failing the report.
pub trait SelfWatch: Send + Sync {
    fn status(&self) -> String;
}

/// Compile-time check for the self-watch capability
///
/// Bindable value types opt in with a one-line impl; the defaulted hook keeps
/// absence a first-class `None` rather than a sentinel. The monitor shares
/// its lifetime with the bound value (`Arc`), never with the registry.
pub trait Watchable {
    fn watcher(&self) -> Option<Arc<dyn SelfWatch>> {
        None
    }
}

// Plain payload types bind without monitors.
impl Watchable for String {}
impl Watchable for Vec<u8> {}
impl Watchable for () {}

/// One recorded bind: the attribute's label plus its monitor, if any
#[derive(Clone)]
pub struct WatchEntry {
    pub label: String,
    pub monitor: Option<Arc<dyn SelfWatch>>,
}

/// Thread-safe, insertion-ordered collection of watch entries
///
/// Entries are never removed; duplicates are allowed (the same attribute may
/// be bound repeatedly). Relative order of *concurrent* records is advisory.
#[derive(Default)]
pub struct WatchRegistry {
    entries: Mutex<Vec<WatchEntry>>,
}

impl WatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry; safe from concurrent binds
    pub fn record(&self, label: impl Into<String>, monitor: Option<Arc<dyn SelfWatch>>) {
        let entry = WatchEntry {
            label: label.into(),
            monitor,
        };
        self.entries.lock().unwrap().push(entry);
    }

    /// Number of entries recorded so far
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the aggregate report: a count header, then one line per entry
    /// in recording order. Composes raw text only; callers that embed the
    /// result apply [`encode_status`] themselves.
    pub fn report(&self) -> String {
        let entries = self.entries.lock().unwrap();
        let mut out = format!("Created {} object(s):\n", entries.len());
        for entry in entries.iter() {
            out.push_str(&entry.label);
            if let Some(monitor) = &entry.monitor {
                out.push(' ');
                out.push_str(&monitor.status());
            }
            out.push('\n');
        }
        out
    }
}

/// Fold a multi-line status report onto a single line
///
/// Applied once, at the outermost edge, so an aggregate report embeds as one
/// entry line inside an outer report instead of breaking its framing.
pub fn encode_status(raw: &str) -> String {
    raw.trim_end_matches(['\r', '\n'])
        .replace("\r\n", "; ")
        .replace('\n', "; ")
}
