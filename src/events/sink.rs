//! Event sinks
//!
//! The security event log is append-only. Write failures are reported through
//! tracing and counted, never raised: a broken log must not stop a simulation.

use crate::events::security_event::{SecurityEvent, SecurityEventKind};
use crate::types::OutputFormat;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Append-only destination for security events
pub trait EventSink {
    /// Record one event
    fn log(&mut self, event: &SecurityEvent);
}

/// Appends events to a file, one line each
#[derive(Debug)]
pub struct FileEventSink {
    path: PathBuf,
    format: OutputFormat,
    written: usize,
    write_failures: usize,
}

impl FileEventSink {
    /// Create a sink appending to `path` in `format`
    ///
    /// The file is created on first write.
    pub fn new(path: impl AsRef<Path>, format: OutputFormat) -> Self {
        Self { path: path.as_ref().to_path_buf(), format, written: 0, write_failures: 0 }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of events successfully appended
    pub fn written(&self) -> usize {
        self.written
    }

    /// Number of events lost to I/O errors
    pub fn write_failures(&self) -> usize {
        self.write_failures
    }

    fn render(&self, event: &SecurityEvent) -> io::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(event.to_log_line()),
            OutputFormat::Json => serde_json::to_string(event).map_err(io::Error::from),
        }
    }

    fn append(&self, event: &SecurityEvent) -> io::Result<()> {
        let line = self.render(event)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl EventSink for FileEventSink {
    fn log(&mut self, event: &SecurityEvent) {
        match self.append(event) {
            Ok(()) => {
                self.written += 1;
                debug!(path = %self.path.display(), kind = %event.kind, "Security event appended");
            }
            Err(e) => {
                self.write_failures += 1;
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to append security event, continuing"
                );
            }
        }
    }
}

/// Keeps events in memory
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Vec<SecurityEvent>,
}

impl MemoryEventSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were logged
    pub fn events(&self) -> &[SecurityEvent] {
        &self.events
    }

    /// Messages in the order they were logged
    pub fn messages(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.message.as_str()).collect()
    }

    /// Kinds in the order they were logged
    pub fn kinds(&self) -> Vec<SecurityEventKind> {
        self.events.iter().map(|e| e.kind).collect()
    }

    /// Number of logged events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was logged
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget all logged events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for MemoryEventSink {
    fn log(&mut self, event: &SecurityEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::security_event::EventSite;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_appends_text_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SecurityLog.txt");
        let mut sink = FileEventSink::new(&path, OutputFormat::Text);

        sink.log(&SecurityEvent::marker("first"));
        sink.log(&SecurityEvent::marker("second"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
        assert_eq!(sink.written(), 2);
        assert_eq!(sink.write_failures(), 0);
    }

    #[test]
    fn test_file_sink_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SecurityLog.txt");
        fs::write(&path, "[2024-01-01 00:00:00] earlier run\n").unwrap();

        let mut sink = FileEventSink::new(&path, OutputFormat::Text);
        sink.log(&SecurityEvent::marker("later run"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.starts_with("[2024-01-01 00:00:00] earlier run"));
    }

    #[test]
    fn test_file_sink_json_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.jsonl");
        let mut sink = FileEventSink::new(&path, OutputFormat::Json);

        let site = EventSite::new("HQ", 1, "R_1_1");
        sink.log(&SecurityEvent::at_site(SecurityEventKind::WaterFlowStarted, &site));

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(value["kind"], "WaterFlowStarted");
        assert_eq!(value["site"]["floor"], 1);
    }

    #[test]
    fn test_file_sink_swallows_io_errors() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let mut sink = FileEventSink::new(dir.path(), OutputFormat::Text);

        sink.log(&SecurityEvent::marker("lost"));
        sink.log(&SecurityEvent::marker("also lost"));

        assert_eq!(sink.written(), 0);
        assert_eq!(sink.write_failures(), 2);
    }

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemoryEventSink::new();
        assert!(sink.is_empty());

        sink.log(&SecurityEvent::marker("a"));
        sink.log(&SecurityEvent::marker("b"));

        assert_eq!(sink.messages(), vec!["a", "b"]);
        assert_eq!(sink.kinds(), vec![SecurityEventKind::Marker, SecurityEventKind::Marker]);

        sink.clear();
        assert_eq!(sink.len(), 0);
    }
}
