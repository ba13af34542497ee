//! Domain Services
//!
//! Stateless operations over the ports.

pub mod discovery;

pub use discovery::{
    discover_projects, discover_sources, parse_name, resolve_project, resolve_source, Discovery,
};
