//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables console reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::UnitKind;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Run started
    Started {
        source_root: PathBuf,
        destination_root: PathBuf,
        unit_count: usize,
        dry_run: bool,
    },

    /// A stale destination entry was removed
    Removed { index: usize, path: PathBuf },

    /// A file or tree was copied into place
    Copied {
        index: usize,
        name: String,
        kind: UnitKind,
        source: PathBuf,
        destination: PathBuf,
    },

    /// Dry run: the copy that would happen
    Planned {
        index: usize,
        name: String,
        kind: UnitKind,
        source: PathBuf,
        destination: PathBuf,
    },

    /// Unit left alone without counting as a failure
    Skipped {
        index: usize,
        name: String,
        reason: String,
    },

    /// Unit failed
    Failed {
        index: usize,
        name: String,
        error: String,
    },

    /// Run completed
    Completed {
        deployed: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    #[derive(Clone, Default)]
    pub struct RecordingEventSink {
        pub events: Arc<Mutex<Vec<DeployEvent>>>,
    }

    impl RecordingEventSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<DeployEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl DeployEventSink for RecordingEventSink {
        fn on_event(&self, event: DeployEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink::new();

        sink.on_event(DeployEvent::Completed {
            deployed: 1,
            skipped: 0,
            failed: 0,
        });

        assert_eq!(sink.events().len(), 1);
    }
}
