//! Process Implementations
//!
//! Concrete implementations of the ProcessRunner port.

mod local;

pub use local::LocalProcessRunner;
