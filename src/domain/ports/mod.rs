//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod file_system;
pub mod process_runner;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{DirEntryInfo, EntryKind, FileSystem};
pub use process_runner::{ProcessRunner, ProcessSpec};
