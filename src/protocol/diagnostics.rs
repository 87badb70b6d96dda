//! Structured diagnostics the codec emits.
//!
//! The core does not own a log destination; it hands events to a
//! [`DiagnosticSink`] supplied by the relay. [`TracingSink`] is the
//! production default and forwards to `tracing`; [`RecordingSink`] captures
//! events in memory for tests and operator tooling.

use std::sync::Mutex;
use tracing::{debug, warn};

/// One diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A compiled variant was installed at its mapped identifier.
    MappingEstablished { name: &'static str, id: u8 },
    /// An external mapping entry has no compiled variant behind it.
    MappingMissing { name: String, id: u8 },
    /// Re-encoding a decoded packet produced a different byte length than
    /// the wire carried: the compiled layout has drifted from live traffic.
    DriftDetected {
        kind: &'static str,
        wire_len: usize,
        reencoded_len: usize,
    },
}

/// Consumer of codec diagnostics. All events are advisory; none require a
/// response from the sink.
pub trait DiagnosticSink: Send + Sync {
    fn mapping_established(&self, name: &'static str, id: u8);
    fn mapping_missing(&self, name: &str, id: u8);
    fn drift_detected(&self, kind: &'static str, wire_len: usize, reencoded_len: usize);
}

/// Default sink: forwards to `tracing`. Coverage gaps and drift are warnings
/// because they mean the mappings file needs updating.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn mapping_established(&self, name: &'static str, id: u8) {
        debug!(packet = name, id, "mapping established");
    }

    fn mapping_missing(&self, name: &str, id: u8) {
        warn!(packet = name, id, "mapping entry has no compiled variant");
    }

    fn drift_detected(&self, kind: &'static str, wire_len: usize, reencoded_len: usize) {
        warn!(
            packet = kind,
            wire_len, reencoded_len,
            "re-encoded length differs from wire; packet layout may have drifted"
        );
    }
}

/// Sink that records every event, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events seen so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Events matching a predicate.
    pub fn filtered(&self, pred: impl Fn(&Diagnostic) -> bool) -> Vec<Diagnostic> {
        self.events().into_iter().filter(|d| pred(d)).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn mapping_established(&self, name: &'static str, id: u8) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Diagnostic::MappingEstablished { name, id });
    }

    fn mapping_missing(&self, name: &str, id: u8) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Diagnostic::MappingMissing {
                name: name.to_string(),
                id,
            });
    }

    fn drift_detected(&self, kind: &'static str, wire_len: usize, reencoded_len: usize) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Diagnostic::DriftDetected {
                kind,
                wire_len,
                reencoded_len,
            });
    }
}
