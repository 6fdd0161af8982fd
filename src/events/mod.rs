//! Security events and the sinks that record them
//!
//! # Overview
//!
//! - **SecurityEvent**: One log entry with timestamp, site and kind
//! - **EventSite**: Building, floor and room an event happened in
//! - **EventSink**: Append-only destination for events
//! - **FileEventSink**: Appends text or JSON lines to a file, never fails the caller
//! - **MemoryEventSink**: Collects events in memory
//!
//! # Usage Example
//!
//! ```rust
//! use building_security_simulator::events::*;
//!
//! let site = EventSite::new("Big Complex", 1, "R_1_1");
//! let mut sink = MemoryEventSink::new();
//! sink.log(&SecurityEvent::at_site(SecurityEventKind::HeatDetected, &site));
//!
//! assert_eq!(sink.len(), 1);
//! assert!(sink.messages()[0].starts_with("Temperature above T1"));
//! ```

pub mod security_event;
pub mod sink;

// Re-export all public types for convenience
pub use security_event::*;
pub use sink::*;
