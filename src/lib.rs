//! plugdeploy - deployment helper for plugin development workspaces
//!
//! Copies Python plugin sources and compiled plugin binaries into a host
//! application's plugin folder, drives the external build orchestrator and
//! patches the IDE configuration with absolute build paths.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, UnitFailure};
pub use config::Config;
pub use domain::value_objects::{UnitKind, UnitName};
pub use error::{DeployError, DeployResult};
