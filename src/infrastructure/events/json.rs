//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
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

/// JSON object for one event
pub fn event_json(event: &GenerateEvent) -> serde_json::Value {
    match event {
        GenerateEvent::Started {
            namespace_name,
            class_name,
            argument_count,
        } => serde_json::json!({
            "event": "start",
            "command": "generate",
            "namespace": namespace_name,
            "class": class_name,
            "argument_count": argument_count,
        }),

        GenerateEvent::StoreLoaded { path, entry_count } => serde_json::json!({
            "event": "store_loaded",
            "command": "generate",
            "path": path.display().to_string(),
            "entry_count": entry_count,
        }),

        GenerateEvent::KeyFound { key } => serde_json::json!({
            "event": "key_found",
            "command": "generate",
            "key": key,
        }),

        GenerateEvent::KeyAdded { key } => serde_json::json!({
            "event": "key_added",
            "command": "generate",
            "key": key,
        }),

        GenerateEvent::KeyKeptBlank { key } => serde_json::json!({
            "event": "key_kept_blank",
            "command": "generate",
            "key": key,
        }),

        GenerateEvent::StoreSaved { path, added_count } => serde_json::json!({
            "event": "store_saved",
            "command": "generate",
            "path": path.display().to_string(),
            "added": added_count,
        }),

        GenerateEvent::Rendered { byte_count } => serde_json::json!({
            "event": "rendered",
            "command": "generate",
            "bytes": byte_count,
        }),

        GenerateEvent::FileWritten { path } => serde_json::json!({
            "event": "file_written",
            "command": "generate",
            "path": path.display().to_string(),
        }),

        GenerateEvent::Completed {
            added_count,
            found_count,
            dry_run,
        } => serde_json::json!({
            "event": "complete",
            "command": "generate",
            "status": "success",
            "added": added_count,
            "found": found_count,
            "dry_run": dry_run,
        }),
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        self.write_event(event_json(&event));
    }
}
