//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Value of the `command` field on every event
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let command = self.command;
        let json = match event {
            DeployEvent::Started {
                source_root,
                destination_root,
                unit_count,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "source": display(&source_root),
                "destination": display(&destination_root),
                "unit_count": unit_count,
                "dry_run": dry_run,
            }),

            DeployEvent::Removed { index, path } => serde_json::json!({
                "event": "item_removed",
                "command": command,
                "index": index,
                "path": display(&path),
            }),

            DeployEvent::Copied {
                index,
                name,
                kind,
                source,
                destination,
            } => serde_json::json!({
                "event": "item_copied",
                "command": command,
                "index": index,
                "name": name,
                "kind": kind,
                "source": display(&source),
                "destination": display(&destination),
            }),

            DeployEvent::Planned {
                index,
                name,
                kind,
                source,
                destination,
            } => serde_json::json!({
                "event": "item_planned",
                "command": command,
                "index": index,
                "name": name,
                "kind": kind,
                "source": display(&source),
                "destination": display(&destination),
            }),

            DeployEvent::Skipped {
                index,
                name,
                reason,
            } => serde_json::json!({
                "event": "item_skipped",
                "command": command,
                "index": index,
                "name": name,
                "reason": reason,
            }),

            DeployEvent::Failed { index, name, error } => serde_json::json!({
                "event": "item_error",
                "command": command,
                "index": index,
                "name": name,
                "error": error,
            }),

            DeployEvent::Completed {
                deployed,
                skipped,
                failed,
            } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "deployed": deployed,
                    "skipped": skipped,
                    "failed": failed,
                })
            }
        };

        self.write_event(json);
    }
}
