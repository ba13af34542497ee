//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sink implementations
//! - `fs/` - Local file system, config directory resolution
//! - `process/` - Child process spawning

pub mod events;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::LocalProcessRunner;
