//! Domain Layer
//!
//! Unit names, deployable units and the ports the application layer talks
//! through.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated names and unit kinds
//! - `entities/` - Source units, artifact units and destination slots
//! - `services/` - Discovery over source and artifact roots
//! - `ports/` - File system and process interfaces
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file and process access goes through `ports`
//! 2. **Explicit configuration** - roots are passed in, never read from globals

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
