//! Console Event Sink
//!
//! Human-readable progress lines on stderr, filtered by verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{GenerateEvent, GenerateEventSink};

/// Event sink that prints progress lines to stderr
pub struct ConsoleEventSink {
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Line for `event`, or None when it is below the verbosity threshold
    fn format(&self, event: &GenerateEvent) -> Option<String> {
        let (level, line) = match event {
            GenerateEvent::Started {
                namespace_name,
                class_name,
                argument_count,
            } => (
                Verbosity::Verbose,
                format!(
                    "Generating {} in {} ({} arguments)",
                    class_name, namespace_name, argument_count
                ),
            ),
            GenerateEvent::StoreLoaded { path, entry_count } => (
                Verbosity::Verbose,
                format!("Loaded {} entries from {}", entry_count, path.display()),
            ),
            GenerateEvent::KeyFound { key } => (Verbosity::Normal, format!("{} exists", key)),
            GenerateEvent::KeyAdded { key } => (Verbosity::Verbose, format!("Added {}", key)),
            GenerateEvent::KeyKeptBlank { key } => (
                Verbosity::Normal,
                format!("{} exists but has no value", key),
            ),
            GenerateEvent::StoreSaved { path, added_count } => (
                Verbosity::Verbose,
                format!("Saved {} ({} added)", path.display(), added_count),
            ),
            GenerateEvent::Rendered { byte_count } => {
                (Verbosity::Debug, format!("Rendered {} bytes", byte_count))
            }
            GenerateEvent::FileWritten { path } => {
                (Verbosity::Verbose, format!("Wrote {}", path.display()))
            }
            GenerateEvent::Completed { .. } => return None,
        };

        (self.verbosity >= level).then_some(line)
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        if let Some(line) = self.format(&event) {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{}", line);
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity > Verbosity::Quiet
    }
}
