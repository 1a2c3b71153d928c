//! Generate Event Port
//!
//! Provides an observable interface for the generate pipeline.
//! Console progress, NDJSON streams and tests all subscribe through it.

use std::path::PathBuf;

/// Event emitted while generating
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// Generation started
    Started {
        namespace_name: String,
        class_name: String,
        argument_count: usize,
    },

    /// Resource store was read
    StoreLoaded { path: PathBuf, entry_count: usize },

    /// Key already holds a non-blank value
    KeyFound { key: String },

    /// Key was appended to the store
    KeyAdded { key: String },

    /// Key exists but is blank and the default is blank too
    KeyKeptBlank { key: String },

    /// Resource store was rewritten
    StoreSaved { path: PathBuf, added_count: usize },

    /// Source text was rendered
    Rendered { byte_count: usize },

    /// Generated file was written
    FileWritten { path: PathBuf },

    /// Generation completed
    Completed {
        added_count: usize,
        found_count: usize,
        dry_run: bool,
    },
}

/// Trait for receiving generate events
pub trait GenerateEventSink: Send + Sync {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);

    /// Check if this sink wants per-key events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<GenerateEvent>>>,
    }

    impl RecordingEventSink {
        fn new() -> (Self, Arc<Mutex<Vec<GenerateEvent>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    events: events.clone(),
                },
                events,
            )
        }
    }

    impl GenerateEventSink for RecordingEventSink {
        fn on_event(&self, event: GenerateEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let (sink, events) = RecordingEventSink::new();

        sink.on_event(GenerateEvent::Started {
            namespace_name: "Pack".to_string(),
            class_name: "Echo".to_string(),
            argument_count: 2,
        });
        sink.on_event(GenerateEvent::KeyAdded {
            key: "EchoDisplayName".to_string(),
        });

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert!(sink.wants_detailed_events());
    }

    #[test]
    fn noop_sink_wants_no_details() {
        let sink = NoopEventSink;
        assert!(!sink.wants_detailed_events());
    }
}
