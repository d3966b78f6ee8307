//! Tracing integration.
//!
//! Emits trace chains as `tracing` events, one per entry, at the level mapped
//! from the entry's severity:
//!
//! | Severity  | Level |
//! |-----------|-------|
//! | `error`   | ERROR |
//! | `warning` | WARN  |
//! | `info`    | INFO  |
//! | `success` | INFO  |
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! resokerr = { version = "1", features = ["tracing"] }
//! ```

use tracing::Level;

use crate::types::{MessageTrace, Outcome, Severity};

/// Level an entry of `severity` is emitted at.
#[must_use]
pub const fn level_for(severity: Severity) -> Level {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARN,
        Severity::Info | Severity::Success => Level::INFO,
    }
}

impl MessageTrace {
    /// Emits one event per chain entry, outermost first.
    ///
    /// Each event carries `severity`, `depth` (0 for this entry) and, when
    /// present, the entry's metadata in debug form.
    pub fn emit(&self) {
        for (depth, entry) in self.iter().enumerate() {
            emit_entry(entry, depth);
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Emits the message (Ok) or cause (Err) chain; does nothing without one.
    pub fn emit(&self) {
        if let Some(trace) = self.trace() {
            trace.emit();
        }
    }
}

fn emit_entry(entry: &MessageTrace, depth: usize) {
    let severity = entry.severity().as_str();
    let metadata = entry.metadata();
    match entry.severity() {
        Severity::Error => tracing::error!(severity, depth, ?metadata, "{}", entry.text()),
        Severity::Warning => tracing::warn!(severity, depth, ?metadata, "{}", entry.text()),
        Severity::Info | Severity::Success => {
            tracing::info!(severity, depth, ?metadata, "{}", entry.text())
        },
    }
}

/// Logs the downgrade applied when an error-bearing chain is attached to an `Ok`.
pub(crate) fn note_downgrade(message: &MessageTrace) {
    if message.has_severity(Severity::Error) {
        let downgraded = message.entries_with(Severity::Error).len();
        tracing::debug!(downgraded, text = message.text(), "error entries attached to Ok downgraded to warning");
    }
}
